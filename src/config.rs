use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlerConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of pages a single crawl will successfully process.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Pause between successive fetches, in milliseconds.
    #[serde(rename = "delayMilliSeconds", default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Per-request timeout in seconds, enforced by the fetcher.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    #[serde(default = "default_head_strip_tags")]
    pub head_strip_tags: Vec<String>,

    #[serde(default = "default_body_strip_tags")]
    pub body_strip_tags: Vec<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            max_pages: default_max_pages(),
            delay_ms: default_delay_ms(),
            request_timeout: default_request_timeout(),
            head_strip_tags: default_head_strip_tags(),
            body_strip_tags: default_body_strip_tags(),
        }
    }
}

impl CrawlerConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.user_agent.trim().is_empty() {
            anyhow::bail!("userAgent must not be empty");
        }
        Ok(())
    }
}

fn default_user_agent() -> String {
    String::from("sitecrawl/0.1")
}

fn default_max_pages() -> usize {
    50
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_request_timeout() -> u64 {
    10
}

fn default_head_strip_tags() -> Vec<String> {
    ["script", "style"].iter().map(|s| s.to_string()).collect()
}

fn default_body_strip_tags() -> Vec<String> {
    ["form", "style", "svg", "script", "canvas", "dialog", "embed", "figcaption"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
