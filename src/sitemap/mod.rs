//! Sitemap Protocol 0.9 output.

pub mod xml;

pub use xml::{UrlSet, write_sitemap};
