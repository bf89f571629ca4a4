// crates/worldview-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong between the remote source and the caller.
///
/// [`WorldError::Network`] and [`WorldError::Status`] together form the
/// "network" class: the caller should offer a retry. [`WorldError::NotFound`]
/// is a well-formed answer with no matching record and must be rendered as
/// "not found" rather than "offline".
#[derive(Debug, Error)]
pub enum WorldError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// The source answered with a non-success HTTP status.
    #[error("request to {url} failed with HTTP {status}")]
    Status { status: u16, url: String },

    /// A single-entity lookup matched nothing.
    #[error("no country found for code '{0}'")]
    NotFound(String),

    /// Detail resolution was requested without a code.
    #[error("no country code given")]
    MissingCode,

    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl WorldError {
    /// True for transport failures and non-success statuses.
    pub fn is_network(&self) -> bool {
        matches!(self, WorldError::Network(_) | WorldError::Status { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, WorldError::NotFound(_))
    }

    /// Transient failures: transport errors, 5xx, 408 and 429.
    /// Other statuses are permanent answers and are not retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            WorldError::Network(_) => true,
            WorldError::Status { status, .. } => matches!(*status, 408 | 429 | 500..),
            _ => false,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for WorldError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => WorldError::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => WorldError::Network(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorldError>;
