mod config;
mod crawler;
mod fetcher;
mod frontier;
mod page;
mod sanitizer;

pub use config::CrawlerConfig;
pub use crawler::{crawl_site, CancelToken, Crawler};
pub use fetcher::{FetchError, HttpFetcher, PageFetcher};
pub use frontier::Frontier;
pub use page::{CrawledPage, Document};
pub use sanitizer::Sanitizer;

pub use anyhow;
