use std::sync::Arc;
use std::time::Duration;
use url::{ParseError, Url};

/// Configuration for the crawler
pub struct CrawlerConfig {
    pub starting_url: Url,
    /// Starting URL as the caller wrote it, this exact string is stored and fetched
    pub seed: String,
    /// Maximum number of links to collect, 0 means no limit
    pub limit: usize,
    /// Per-request timeout, `None` keeps the HTTP client's default
    pub request_timeout_sec: Option<u64>,
}

impl CrawlerConfig {
    pub fn new(starting_url: Url) -> Self {
        Self {
            seed: starting_url.to_string(),
            starting_url,
            limit: 0,
            request_timeout_sec: None,
        }
    }

    /// Parse `seed` but keep the raw string as the crawl's first link.
    pub fn from_seed(seed: &str) -> Result<Self, ParseError> {
        let starting_url = Url::parse(seed)?;
        Ok(Self {
            seed: seed.to_string(),
            ..Self::new(starting_url)
        })
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_request_timeout(mut self, timeout_sec: u64) -> Self {
        self.request_timeout_sec = Some(timeout_sec);
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_sec.map(Duration::from_secs)
    }
}

pub type CrawlerConfigRef = Arc<CrawlerConfig>;
