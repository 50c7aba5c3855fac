//! Football match browser state

use crate::domain_models::FootballMatch;
use serde::Serialize;

/// Listing and favorites, plus the fetch lifecycle flags
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesState {
    pub is_loading: bool,
    pub is_error: bool,
    /// Message of the last failed fetch, cleared when a new fetch starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub football_matches: Vec<FootballMatch>,
    /// Favorite match ids in the order they were added
    pub favorites: Vec<String>,
}

impl MatchesState {
    pub fn is_favorite(&self, fifa_id: &str) -> bool {
        self.favorites.iter().any(|id| id == fifa_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFilterState {
    pub search_query: String,
    /// Stored only; no view consults it
    pub filter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchBrowserState {
    pub matches: MatchesState,
    pub filter: MatchFilterState,
}
