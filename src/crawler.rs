use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use url::Url;

use crate::config::CrawlerConfig;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::frontier::Frontier;
use crate::page::CrawledPage;
use crate::sanitizer::Sanitizer;

/// Signals a running crawl to stop. Clonable and usable from any thread;
/// the crawl loop observes it between iterations and during the paced
/// delay. A cancellation during the delay aborts the whole crawl.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.notify.notify_one();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    async fn cancelled(&self) {
        if !self.is_cancelled() {
            self.notify.notified().await;
        }
    }
}

/// Orchestrates a crawl: seeds the frontier, fetches pages one at a time,
/// sanitizes and records them, and feeds discovered same-site links back in
/// until the page budget is spent or the frontier drains.
pub struct Crawler<F> {
    config: CrawlerConfig,
    fetcher: F,
    sanitizer: Sanitizer,
    cancel: CancelToken,
}

impl<F: PageFetcher> Crawler<F> {
    pub fn new(config: CrawlerConfig, fetcher: F) -> anyhow::Result<Self> {
        config.validate()?;
        let sanitizer = Sanitizer::new(&config.head_strip_tags, &config.body_strip_tags);
        Ok(Self {
            config,
            fetcher,
            sanitizer,
            cancel: CancelToken::new(),
        })
    }

    /// Handle for stopping this crawl from elsewhere.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Crawls outward from `seed` and returns the cleaned pages.
    ///
    /// A failed fetch is logged and skipped without consuming budget; its
    /// outbound links are never discovered. The loop ends when the budget
    /// is spent, the frontier drains, or the cancel token fires.
    pub async fn start(&self, seed: &str) -> HashSet<CrawledPage> {
        let mut pages = HashSet::new();
        let mut budget = self.config.max_pages;
        let scope = Url::parse(seed).ok();

        let mut frontier = Frontier::new();
        frontier.add(seed);

        while budget > 0 && !frontier.is_empty() {
            if self.cancel.is_cancelled() {
                log::info!("Crawl cancelled, stopping");
                break;
            }
            let url = match frontier.next() {
                Some(url) => url,
                None => continue,
            };

            let mut doc = match self.fetcher.fetch(&url, &self.config.user_agent).await {
                Ok(doc) => doc,
                Err(e) => {
                    log::warn!("Skipping URL: {url} got: {e}");
                    continue;
                }
            };

            self.sanitizer.clean(&mut doc);
            for link in doc.links() {
                if scope.as_ref().is_some_and(|seed| in_scope(seed, &link)) {
                    frontier.add(link.as_str());
                }
            }
            frontier.mark_visited(&url);

            pages.insert(CrawledPage {
                url: doc.url().to_string(),
                title: doc.title(),
                content: doc.html(),
            });
            budget -= 1;

            if !self.pace().await {
                break;
            }
        }

        pages
    }

    // Politeness delay, once per successfully processed page. Returns false
    // when the crawl was cancelled mid-sleep.
    async fn pace(&self) -> bool {
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(self.config.delay_ms)) => true,
            _ = self.cancel.cancelled() => {
                log::info!("Crawl cancelled during delay, stopping");
                false
            }
        }
    }
}

fn in_scope(seed: &Url, candidate: &Url) -> bool {
    matches!(candidate.scheme(), "http" | "https") && candidate.host_str() == seed.host_str()
}

/// Crawls `seed` with the default HTTP fetcher.
pub async fn crawl_site(
    config: CrawlerConfig,
    seed: &str,
) -> anyhow::Result<HashSet<CrawledPage>> {
    let fetcher = HttpFetcher::new(Duration::from_secs(config.request_timeout))?;
    let crawler = Crawler::new(config, fetcher)?;
    Ok(crawler.start(seed).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_matches_host_over_web_schemes() {
        let seed = Url::parse("https://site.test/a").unwrap();
        assert!(in_scope(&seed, &Url::parse("https://site.test/b").unwrap()));
        assert!(in_scope(&seed, &Url::parse("http://site.test/b").unwrap()));
        assert!(!in_scope(&seed, &Url::parse("https://other.test/b").unwrap()));
        assert!(!in_scope(&seed, &Url::parse("mailto:x@site.test").unwrap()));
    }

    #[test]
    fn cancel_token_flags_once_fired() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }
}
