//! Page fetching service.
//!
//! Downloads a single page and returns the same-domain links found on it.
//! The effective domain comes from the resolved response URL, so a seed
//! that redirects (say `http://` to `https://`) filters against the
//! post-redirect domain.

use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;

use crate::error::Result;
use crate::services::extract::extract_links;
use crate::utils::{domain_prefix, filter_links, http, with_prefix};

/// Source of outbound links for a URL.
///
/// The traversal engine only talks to this trait, which keeps it
/// independent of the network.
#[async_trait]
pub trait LinkSource {
    /// Return the same-domain links found on the page at `url`.
    async fn fetch_links(&self, url: &str) -> Result<Vec<String>>;
}

/// Fetches pages over HTTP and extracts their same-domain links.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a fetcher around a configured HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LinkSource for PageFetcher {
    async fn fetch_links(&self, url: &str) -> Result<Vec<String>> {
        // One GET per page; redirects follow the client's default policy.
        let (resolved, body) = http::fetch_page(&self.client, url).await?;
        let base = domain_prefix(&resolved);

        let document = Html::parse_document(&body);
        let links = extract_links(&document, &base);
        Ok(filter_links(links, with_prefix(base)))
    }
}
