//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Derive the `scheme://host` prefix of a URL.
///
/// Path, query, fragment and credentials are discarded. An explicit
/// non-default port stays part of the host.
///
/// # Examples
/// ```
/// use url::Url;
/// use sitemapper::utils::domain_prefix;
///
/// let url = Url::parse("https://example.com/a/b?q=1").unwrap();
/// assert_eq!(domain_prefix(&url), "https://example.com");
/// ```
pub fn domain_prefix(url: &Url) -> String {
    let mut prefix = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        prefix.push(':');
        prefix.push_str(&port.to_string());
    }
    prefix
}

/// Keep only the links for which `keep` returns true, preserving order.
pub fn filter_links<F>(links: Vec<String>, keep: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    links.into_iter().filter(|link| keep(link)).collect()
}

/// Predicate matching links that start with the given prefix.
///
/// The crawler uses this with a domain prefix to keep only same-domain
/// links. The match is a literal string-prefix test, so `https://x.com`
/// and `https://x.com/` stay distinct keys.
pub fn with_prefix(prefix: String) -> impl Fn(&str) -> bool {
    move |link: &str| link.starts_with(&prefix)
}
