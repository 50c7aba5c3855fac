//! Match Reducer
//!
//! Owns the `matches` slice: fetch lifecycle flags, the listing and the
//! favorites. `FETCH_MATCHES` is consumed by middleware before it gets here.

use crate::actions::MatchAction;
use crate::state::MatchesState;
use unistore::Reducer;

pub fn reduce_matches(mut state: MatchesState, action: &MatchAction) -> MatchesState {
    match action {
        MatchAction::FetchMatchesRequest => {
            state.is_loading = true;
            state.is_error = false;
            state.error_message = None;
        }
        MatchAction::FetchMatchesSuccess(matches) => {
            log::info!("Loaded {} matches", matches.len());
            state.is_loading = false;
            state.football_matches = matches.clone();
        }
        MatchAction::FetchMatchesFailure(message) => {
            log::warn!("Fetching matches failed: {}", message);
            state.is_loading = false;
            state.is_error = true;
            state.error_message = Some(message.clone());
        }
        MatchAction::ToggleFavorite(id) => {
            if state.is_favorite(id) {
                state.favorites.retain(|favorite| favorite != id);
            } else {
                state.favorites.push(id.clone());
            }
        }
        MatchAction::FetchMatches
        | MatchAction::SetSearchQuery(_)
        | MatchAction::SetFilter(_) => {}
    }
    state
}

impl Reducer<MatchAction> for MatchesState {
    fn reduce(self, action: &MatchAction) -> Self {
        reduce_matches(self, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::FootballMatch;

    fn listing() -> Vec<FootballMatch> {
        vec![
            FootballMatch::new("300186456", "Brazil", "Croatia"),
            FootballMatch::new("300186457", "Mexico", "Cameroon"),
        ]
    }

    #[test]
    fn test_request_sets_loading_and_clears_error() {
        let state = MatchesState {
            is_error: true,
            error_message: Some("boom".to_string()),
            ..Default::default()
        };

        let next = reduce_matches(state, &MatchAction::FetchMatchesRequest);
        assert!(next.is_loading);
        assert!(!next.is_error);
        assert_eq!(next.error_message, None);
    }

    #[test]
    fn test_success_stores_listing() {
        let state = reduce_matches(MatchesState::default(), &MatchAction::FetchMatchesRequest);
        let next = reduce_matches(state, &MatchAction::FetchMatchesSuccess(listing()));

        assert!(!next.is_loading);
        assert!(!next.is_error);
        assert_eq!(next.football_matches, listing());
    }

    #[test]
    fn test_failure_keeps_previous_listing() {
        let state = MatchesState {
            football_matches: listing(),
            ..Default::default()
        };
        let loading = reduce_matches(state, &MatchAction::FetchMatchesRequest);
        let failed = reduce_matches(
            loading,
            &MatchAction::FetchMatchesFailure("connection refused".to_string()),
        );

        assert!(!failed.is_loading);
        assert!(failed.is_error);
        assert_eq!(failed.error_message.as_deref(), Some("connection refused"));
        assert_eq!(failed.football_matches, listing());
    }

    #[test]
    fn test_toggle_favorite_adds_then_removes() {
        let state = reduce_matches(
            MatchesState::default(),
            &MatchAction::ToggleFavorite("77".to_string()),
        );
        assert_eq!(state.favorites, vec!["77"]);

        let state = reduce_matches(state, &MatchAction::ToggleFavorite("77".to_string()));
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_favorites_keep_insertion_order() {
        let state = ["3", "1", "2"].iter().fold(MatchesState::default(), |state, id| {
            reduce_matches(state, &MatchAction::ToggleFavorite(id.to_string()))
        });
        let state = reduce_matches(state, &MatchAction::ToggleFavorite("1".to_string()));
        assert_eq!(state.favorites, vec!["3", "2"]);
    }

    #[test]
    fn test_filter_actions_leave_slice_unchanged() {
        let state = MatchesState {
            football_matches: listing(),
            favorites: vec!["1".to_string()],
            ..Default::default()
        };
        for action in [
            MatchAction::SetSearchQuery("Brazil".to_string()),
            MatchAction::SetFilter("group".to_string()),
            MatchAction::FetchMatches,
        ] {
            assert_eq!(reduce_matches(state.clone(), &action), state);
        }
    }
}
