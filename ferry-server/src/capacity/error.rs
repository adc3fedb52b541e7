//! Capacity feed error types.

use std::time::Duration;

/// Errors from a capacity feed fetch.
///
/// All of these are recoverable: the refresh loop reports them and keeps
/// serving the previous snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CapacityError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status
    #[error("feed error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the feed response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The fetch did not complete within the scheduler's per-attempt budget
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),
}
