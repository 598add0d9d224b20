//! Source transport seam.
//!
//! The resolver never talks to a network stack directly; the host hands
//! it a `SourceFetcher`. Tests use an in-memory map, a browser host can
//! wrap `fetch`, a server host can wrap its HTTP client.

use async_trait::async_trait;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Non-success HTTP status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// Transport-level failure.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request could not be made at all.
    #[error("Request error: {0}")]
    Request(String),
}

/// Retrieves catalog source payloads as text.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Fetch the payload at `path`.
    ///
    /// Implementations must map non-success responses to
    /// [`FetchError::Http`] so the resolver can skip the candidate.
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}
