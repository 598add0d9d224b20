//! Ingestion error types.

use crate::fetch::FetchError;
use thiserror::Error;

/// Errors that can occur while loading catalog data.
///
/// Resolver-side failures (`SourceUnavailable`, `MalformedPayload`) are
/// recovered locally by advancing to the next candidate and are carried
/// as data on the resolution, never propagated. `UploadParseFailure` is
/// the one surfaced to the user, with the underlying detail included.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Retrieval failed or returned a non-success status.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// An automatic source parsed or validated incorrectly.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A user-supplied file could not be read or parsed.
    #[error("Failed to load data: {0}")]
    UploadParseFailure(String),
}

impl From<FetchError> for IngestError {
    fn from(e: FetchError) -> Self {
        IngestError::SourceUnavailable(e.to_string())
    }
}
