// crates/worldview-core/src/config.rs

//! Source configuration: where to fetch from and how hard to try.

use crate::error::{Result, WorldError};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Field projection for list queries. The source caps projections at ten
/// fields, so this list is exactly the attributes the model needs.
pub const DEFAULT_FIELDS: &str =
    "cca2,name,flags,region,borders,capital,languages,subregion,currencies,population";

/// Projection used when resolving border codes into display names.
pub const BORDER_FIELDS: &str = "cca2,name";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Retry behaviour for the bulk list queries (`all`, `region`).
///
/// `retries` counts attempts *after* the first one. Only transient failures
/// (see [`WorldError::is_retryable`]) are retried; the wait before attempt
/// `n` is `backoff * n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub const fn none() -> Self {
        Self {
            retries: 0,
            backoff: Duration::ZERO,
        }
    }

    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.backoff * attempt
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL without trailing slash, e.g. `https://restcountries.com/v3.1`.
    pub base_url: String,
    /// Comma-separated field projection for list queries.
    pub fields: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fields: DEFAULT_FIELDS.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl SourceConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Cheap structural checks: http(s) scheme, something after it, and a
    /// non-empty projection. The URL itself is parsed by
    /// [`HttpSource::new`](crate::source::HttpSource), which rejects what
    /// this lets through (e.g. spaces in the host).
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| {
                WorldError::InvalidConfig(format!("base URL must be http(s): '{url}'"))
            })?;
        if rest.is_empty() || rest.starts_with('/') {
            return Err(WorldError::InvalidConfig(format!(
                "base URL has no host: '{url}'"
            )));
        }
        if self.fields.trim().is_empty() {
            return Err(WorldError::InvalidConfig("field projection is empty".into()));
        }
        Ok(())
    }
}
