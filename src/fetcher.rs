use std::future::Future;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::page::Document;

/// Why a single page fetch failed. The crawl loop treats every variant the
/// same way (skip and continue); the distinction exists for logging and
/// tests.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("malformed URL: {0}")]
    MalformedUrl(#[from] url::ParseError),
    #[error("HTTP status {0}")]
    Status(StatusCode),
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("request timed out")]
    Timeout,
    #[error(transparent)]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(e)
        }
    }
}

/// Retrieves a URL and turns the response into a navigable [`Document`].
pub trait PageFetcher {
    fn fetch(
        &self,
        url: &str,
        user_agent: &str,
    ) -> impl Future<Output = Result<Document, FetchError>>;
}

/// Production fetcher backed by reqwest. Buffers the whole response before
/// parsing, follows redirects to the final URL, and enforces its own
/// request timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, user_agent: &str) -> Result<Document, FetchError> {
        let url = Url::parse(url)?;
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        if let Some(content_type) = resp.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or("");
            if !is_html(content_type) {
                return Err(FetchError::UnsupportedContentType(content_type.to_string()));
            }
        }

        let resolved = resp.url().clone();
        let body = resp.text().await?;
        Ok(Document::parse(&body, resolved))
    }
}

fn is_html(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    matches!(mime, "text/html" | "application/xhtml+xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_content_types_accepted() {
        assert!(is_html("text/html"));
        assert!(is_html("text/html; charset=utf-8"));
        assert!(is_html("application/xhtml+xml"));
    }

    #[test]
    fn non_html_content_types_rejected() {
        assert!(!is_html("application/pdf"));
        assert!(!is_html("image/png"));
        assert!(!is_html("application/json; charset=utf-8"));
    }
}
