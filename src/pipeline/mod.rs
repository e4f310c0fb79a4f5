//! Pipeline entry points.
//!
//! - `run_crawl`: Discover all same-domain pages reachable from the seed

pub mod crawl;

pub use crawl::run_crawl;
