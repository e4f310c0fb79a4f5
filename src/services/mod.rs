//! Crawling services.
//!
//! - `extract`: pull candidate links out of an HTML document
//! - `fetch`: download a page and return its same-domain links
//! - `traverse`: breadth-first expansion across depth levels

pub mod extract;
pub mod fetch;
pub mod traverse;

pub use extract::extract_links;
pub use fetch::{LinkSource, PageFetcher};
pub use traverse::CrawlSession;
