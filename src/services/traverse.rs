//! Breadth-first traversal engine.
//!
//! Expands the link graph level by level: the current frontier holds the
//! URLs to fetch at this depth, newly discovered links accumulate into the
//! next frontier, and every fully expanded URL lands in the visited set.
//! The visited set at termination is the crawl result.

use std::collections::HashSet;
use std::mem;

use crate::error::{AppError, Result};
use crate::services::fetch::LinkSource;

/// State for one crawl: the visited set and frontier handoff.
///
/// Each session is independent, so several crawls can run in the same
/// process without sharing state.
#[derive(Debug, Default)]
pub struct CrawlSession {
    visited: HashSet<String>,
}

impl CrawlSession {
    /// Create a fresh session with nothing visited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Crawl breadth-first from `seed_url` up to `max_depth` link hops.
    ///
    /// Runs `max_depth + 1` frontier rounds (depth 0 processes only the
    /// seed) and stops early once a frontier comes up empty. Each URL is
    /// fetched at most once; fetch failures abort the crawl with the
    /// failing URL as context. The returned pages are unordered.
    pub async fn run(
        &mut self,
        source: &dyn LinkSource,
        seed_url: &str,
        max_depth: usize,
    ) -> Result<Vec<String>> {
        let mut next_frontier: HashSet<String> = HashSet::new();
        next_frontier.insert(seed_url.to_string());

        for depth in 0..=max_depth {
            let frontier = mem::take(&mut next_frontier);
            if frontier.is_empty() {
                break;
            }
            log::debug!("Expanding depth {} ({} URLs queued)", depth, frontier.len());

            for url in frontier {
                if self.visited.contains(&url) {
                    continue;
                }

                let links = source
                    .fetch_links(&url)
                    .await
                    .map_err(|e| AppError::crawl(&url, e))?;

                for link in links {
                    if !self.visited.contains(&link) {
                        next_frontier.insert(link);
                    }
                }

                log::info!("URL found: {}", url);
                self.visited.insert(url);
            }
        }

        Ok(self.visited.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// In-memory link graph that records every fetch it serves.
    struct StaticLinkSource {
        pages: HashMap<String, Vec<String>>,
        fetched: Mutex<Vec<String>>,
    }

    impl StaticLinkSource {
        fn new(pages: &[(&str, &[&str])]) -> Self {
            let pages = pages
                .iter()
                .map(|(url, links)| {
                    (
                        url.to_string(),
                        links.iter().map(|l| l.to_string()).collect(),
                    )
                })
                .collect();
            Self {
                pages,
                fetched: Mutex::new(Vec::new()),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetched.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LinkSource for StaticLinkSource {
        async fn fetch_links(&self, url: &str) -> Result<Vec<String>> {
            self.fetched.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| AppError::crawl(url, "connection refused"))
        }
    }

    fn sorted(mut pages: Vec<String>) -> Vec<String> {
        pages.sort();
        pages
    }

    #[tokio::test]
    async fn test_seed_only_at_depth_zero() {
        let source = StaticLinkSource::new(&[(
            "https://example.com/",
            &["https://example.com/a", "https://example.com/b"],
        )]);

        let pages = CrawlSession::new()
            .run(&source, "https://example.com/", 0)
            .await
            .unwrap();

        assert_eq!(pages, vec!["https://example.com/"]);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_depth_bound_respected() {
        // Chain: seed -> a -> b -> c; depth 1 must not reach b or c.
        let source = StaticLinkSource::new(&[
            ("https://example.com/", &["https://example.com/a"][..]),
            ("https://example.com/a", &["https://example.com/b"]),
            ("https://example.com/b", &["https://example.com/c"]),
            ("https://example.com/c", &[]),
        ]);

        let pages = CrawlSession::new()
            .run(&source, "https://example.com/", 1)
            .await
            .unwrap();

        assert_eq!(
            sorted(pages),
            vec!["https://example.com/", "https://example.com/a"]
        );
    }

    #[tokio::test]
    async fn test_terminates_on_empty_frontier() {
        let source = StaticLinkSource::new(&[("https://example.com/", &[])]);

        let pages = CrawlSession::new()
            .run(&source, "https://example.com/", 100)
            .await
            .unwrap();

        assert_eq!(pages, vec!["https://example.com/"]);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_each_url_fetched_at_most_once() {
        // a and b link back to the seed and to each other.
        let source = StaticLinkSource::new(&[
            (
                "https://example.com/",
                &["https://example.com/a", "https://example.com/b"][..],
            ),
            (
                "https://example.com/a",
                &["https://example.com/", "https://example.com/b"],
            ),
            (
                "https://example.com/b",
                &["https://example.com/", "https://example.com/a"],
            ),
        ]);

        let pages = CrawlSession::new()
            .run(&source, "https://example.com/", 5)
            .await
            .unwrap();

        assert_eq!(pages.len(), 3);
        assert_eq!(source.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_no_duplicates_in_result() {
        let source = StaticLinkSource::new(&[
            (
                "https://example.com/",
                // Same link twice on one page
                &["https://example.com/a", "https://example.com/a"][..],
            ),
            ("https://example.com/a", &[]),
        ]);

        let pages = CrawlSession::new()
            .run(&source, "https://example.com/", 2)
            .await
            .unwrap();

        assert_eq!(
            sorted(pages),
            vec!["https://example.com/", "https://example.com/a"]
        );
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        // Seed links to /a, /b (same domain; other.com and mailto were
        // already filtered out by the fetcher); /a and /b are leaves.
        let source = StaticLinkSource::new(&[
            (
                "https://example.com/",
                &["https://example.com/a", "https://example.com/b"][..],
            ),
            ("https://example.com/a", &[]),
            ("https://example.com/b", &[]),
        ]);

        let pages = CrawlSession::new()
            .run(&source, "https://example.com/", 1)
            .await
            .unwrap();

        assert_eq!(
            sorted(pages),
            vec![
                "https://example.com/",
                "https://example.com/a",
                "https://example.com/b",
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_crawl() {
        // /broken is not in the graph, so fetching it fails.
        let source = StaticLinkSource::new(&[(
            "https://example.com/",
            &["https://example.com/broken"][..],
        )]);

        let result = CrawlSession::new()
            .run(&source, "https://example.com/", 2)
            .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("https://example.com/broken"));
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let source = StaticLinkSource::new(&[("https://example.com/", &[])]);

        let first = CrawlSession::new()
            .run(&source, "https://example.com/", 0)
            .await
            .unwrap();
        let second = CrawlSession::new()
            .run(&source, "https://example.com/", 0)
            .await
            .unwrap();

        assert_eq!(first, second);
        // A fresh session re-fetches; visited state is not shared.
        assert_eq!(source.fetch_count(), 2);
    }
}
