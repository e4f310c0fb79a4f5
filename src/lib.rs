// src/lib.rs

//! sitemapper Library
//!
//! Breadth-first, same-domain web crawling and Sitemap Protocol 0.9 output.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod sitemap;
pub mod utils;
