use thiserror::Error;

/// Failure of a match listing fetch
///
/// The `Display` output is what ends up in the match browser's state.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Could not decode match listing: {0}")]
    Decode(#[from] serde_json::Error),
}
