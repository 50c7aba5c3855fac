//! Actions for the football match browser.

use crate::domain_models::FootballMatch;
use unistore::Action;

#[derive(Debug, Clone, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchAction {
    /// Start fetching the listing; handled by `MatchFetchMiddleware`,
    /// never reaches the reducer
    FetchMatches,

    // Fetch lifecycle, dispatched by the task runner
    FetchMatchesRequest,
    FetchMatchesSuccess(Vec<FootballMatch>),
    FetchMatchesFailure(String),

    /// Add the match id to favorites, or remove it if already there
    ToggleFavorite(String),

    SetSearchQuery(String),
    SetFilter(String),
}

impl Action for MatchAction {
    fn kind(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_kinds() {
        assert_eq!(MatchAction::FetchMatchesRequest.kind(), "FETCH_MATCHES_REQUEST");
        assert_eq!(
            MatchAction::FetchMatchesSuccess(vec![]).kind(),
            "FETCH_MATCHES_SUCCESS"
        );
        assert_eq!(
            MatchAction::FetchMatchesFailure(String::new()).kind(),
            "FETCH_MATCHES_FAILURE"
        );
        assert_eq!(MatchAction::SetSearchQuery(String::new()).kind(), "SET_SEARCH_QUERY");
    }
}
