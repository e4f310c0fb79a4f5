//! Data models and configuration.

pub mod config;

pub use config::{Config, CrawlConfig, HttpConfig};
