// src/api/error.rs
use thiserror::Error;

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS, TLS, reset...
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("HTTP {code} {text} from {url}")]
    Status { code: u16, text: String, url: String },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON that the backend flagged as an error.
    #[error("backend error: {0}")]
    Backend(String),

    #[error("invalid request: {0}")]
    Request(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
