//! Error types for the shop.
//!
//! - [`FetchError`] - transport-level failures of a single HTTP request
//! - [`NetworkError`] - the only error kind surfaced by the fetchers

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpStatus(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Failure of a catalog or taxonomy fetch.
///
/// Timeouts, DNS failures and 4xx/5xx responses all collapse into this one
/// kind. The underlying [`FetchError`] is kept for logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("network error: {source}")]
pub struct NetworkError {
    #[from]
    source: FetchError,
}

impl NetworkError {
    /// The transport failure that caused this error.
    pub fn cause(&self) -> &FetchError {
        &self.source
    }
}
