// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use url::Url;

use crate::error::Result;
use crate::models::HttpConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and return the resolved request URL together with the body.
///
/// The resolved URL reflects any redirects followed by the client, so the
/// caller can derive the effective domain from it rather than from the
/// requested URL.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<(Url, String)> {
    let response = client.get(url).send().await?;
    let resolved = response.url().clone();
    let body = response.text().await?;
    Ok((resolved, body))
}
