//! Link extraction from HTML documents.

use scraper::{Html, Selector};

/// Extract candidate links from an HTML document, in document order.
///
/// Site-relative hrefs (leading `/`) are qualified with `domain_prefix`.
/// Absolute `http`/`https` hrefs are kept as-is. Everything else
/// (`mailto:`, `tel:`, `javascript:`, fragment-only, relative paths
/// without a leading slash) is dropped. No deduplication happens here;
/// the traversal's set semantics take care of duplicates.
pub fn extract_links(document: &Html, domain_prefix: &str) -> Vec<String> {
    let selector = Selector::parse("a[href]").unwrap();

    let mut links = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.starts_with('/') {
            links.push(format!("{domain_prefix}{href}"));
        } else if href.starts_with("http") {
            links.push(href.to_string());
        }
    }
    links
}
