use crate::error::FetchError;
use crate::types::FootballMatch;
use async_trait::async_trait;

/// Match listing client trait
///
/// Implementations must be `Send + Sync` so they can be shared with the
/// async tasks that run the fetch.
#[async_trait]
pub trait MatchClient: Send + Sync {
    /// Fetch one page of the match listing
    ///
    /// Any failure (network, non-success status, decode) is reported as
    /// a [`FetchError`]. There is no retry.
    async fn fetch_matches(&self, page: u32) -> Result<Vec<FootballMatch>, FetchError>;
}
