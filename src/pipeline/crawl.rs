// src/pipeline/crawl.rs

//! Crawl pipeline.

use crate::error::Result;
use crate::models::Config;
use crate::services::{CrawlSession, PageFetcher};
use crate::utils::http;

/// Run a breadth-first crawl as configured and return the discovered pages.
///
/// The returned list is unordered and duplicate-free. Any transport
/// failure aborts the crawl and surfaces here with the failing URL as
/// context.
pub async fn run_crawl(config: &Config) -> Result<Vec<String>> {
    log::info!(
        "Crawling {} to depth {}",
        config.crawl.seed_url,
        config.crawl.max_depth
    );

    let client = http::create_async_client(&config.http)?;
    let fetcher = PageFetcher::new(client);

    let mut session = CrawlSession::new();
    let pages = session
        .run(&fetcher, &config.crawl.seed_url, config.crawl.max_depth)
        .await?;

    log::info!("Crawl complete: {} pages discovered", pages.len());

    Ok(pages)
}
