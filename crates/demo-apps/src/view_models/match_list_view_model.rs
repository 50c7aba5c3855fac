//! Match List View Model

use crate::domain_models::FootballMatch;
use crate::state::MatchBrowserState;

/// Matches whose team1 or team2 contains `search_query`, ignoring case
///
/// An empty query keeps every match. Order is preserved.
pub fn filtered_matches<'a>(
    matches: &'a [FootballMatch],
    search_query: &str,
) -> Vec<&'a FootballMatch> {
    let query = search_query.to_lowercase();
    matches
        .iter()
        .filter(|m| m.team1.to_lowercase().contains(&query) || m.team2.to_lowercase().contains(&query))
        .collect()
}

/// One rendered line of the match list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub fifa_id: String,
    /// e.g. "Brazil vs Croatia (2014-06-12)"
    pub label: String,
    pub is_favorite: bool,
}

impl MatchRow {
    /// Label of the favorite button
    pub fn favorite_label(&self) -> &'static str {
        if self.is_favorite {
            "Unfavorite"
        } else {
            "Favorite"
        }
    }
}

/// View model for the match browser - handles presentation logic
pub struct MatchListViewModel<'a> {
    state: &'a MatchBrowserState,
}

impl<'a> MatchListViewModel<'a> {
    pub fn new(state: &'a MatchBrowserState) -> Self {
        Self { state }
    }

    pub fn is_loading(&self) -> bool {
        self.state.matches.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.state.matches.is_error
    }

    pub fn search_query(&self) -> &str {
        &self.state.filter.search_query
    }

    /// Rows for the matches passing the search query
    pub fn rows(&self) -> Vec<MatchRow> {
        filtered_matches(&self.state.matches.football_matches, self.search_query())
            .into_iter()
            .map(|m| MatchRow {
                fifa_id: m.fifa_id.clone(),
                label: match &m.match_date {
                    Some(date) => format!("{} vs {} ({})", m.team1, m.team2, date),
                    None => format!("{} vs {}", m.team1, m.team2),
                },
                is_favorite: self.state.matches.is_favorite(&m.fifa_id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<FootballMatch> {
        let mut opener = FootballMatch::new("300186456", "Brazil", "Croatia");
        opener.match_date = Some("2014-06-12".to_string());
        vec![
            opener,
            FootballMatch::new("300186457", "Mexico", "Cameroon"),
            FootballMatch::new("300186458", "Cameroon", "Brazil"),
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive_on_both_teams() {
        let matches = listing();
        let found = filtered_matches(&matches, "bRaZiL");
        let ids: Vec<_> = found.iter().map(|m| m.fifa_id.as_str()).collect();
        assert_eq!(ids, vec!["300186456", "300186458"]);
    }

    #[test]
    fn test_empty_query_keeps_all() {
        let matches = listing();
        assert_eq!(filtered_matches(&matches, "").len(), 3);
    }

    #[test]
    fn test_rows_mark_favorites() {
        let mut state = MatchBrowserState::default();
        state.matches.football_matches = listing();
        state.matches.favorites = vec!["300186457".to_string()];
        state.filter.search_query = "mex".to_string();

        let rows = MatchListViewModel::new(&state).rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Mexico vs Cameroon");
        assert!(rows[0].is_favorite);
        assert_eq!(rows[0].favorite_label(), "Unfavorite");
    }

    #[test]
    fn test_row_label_includes_date() {
        let mut state = MatchBrowserState::default();
        state.matches.football_matches = listing();

        let rows = MatchListViewModel::new(&state).rows();
        assert_eq!(rows[0].label, "Brazil vs Croatia (2014-06-12)");
        assert_eq!(rows[0].favorite_label(), "Favorite");
    }
}
