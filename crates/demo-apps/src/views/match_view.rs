//! Football match browser view

use super::{common_command, split_command, Command, CommandError, ParseResult, View};
use crate::actions::MatchAction;
use crate::state::MatchBrowserState;
use crate::view_models::MatchListViewModel;

#[derive(Debug, Clone, Copy, Default)]
pub struct MatchView;

impl View for MatchView {
    type State = MatchBrowserState;
    type Action = MatchAction;

    fn title(&self) -> &'static str {
        "Football Matches"
    }

    fn startup_actions(&self) -> Vec<MatchAction> {
        vec![MatchAction::FetchMatches]
    }

    fn parse(&self, line: &str, _state: &MatchBrowserState) -> ParseResult<MatchAction> {
        let Some((verb, rest)) = split_command(line) else {
            return Ok(None);
        };

        match verb.as_str() {
            "refresh" | "fetch" => Ok(Some(Command::Dispatch(MatchAction::FetchMatches))),
            // An empty query clears the search
            "search" => Ok(Some(Command::Dispatch(MatchAction::SetSearchQuery(
                rest.to_string(),
            )))),
            "favorite" | "fav" => {
                if rest.is_empty() {
                    return Ok(None);
                }
                Ok(Some(Command::Dispatch(MatchAction::ToggleFavorite(
                    rest.to_string(),
                ))))
            }
            "filter" => Ok(Some(Command::Dispatch(MatchAction::SetFilter(
                rest.to_string(),
            )))),
            other => common_command(other)
                .map(Some)
                .ok_or_else(|| CommandError::Unknown(other.to_string())),
        }
    }

    fn render(&self, state: &MatchBrowserState) -> String {
        let view_model = MatchListViewModel::new(state);
        let mut out = String::from(self.title());

        if !view_model.search_query().is_empty() {
            out.push_str(&format!("\n  Search: {}", view_model.search_query()));
        }
        if view_model.is_loading() {
            out.push_str("\n  Loading...");
        }
        if view_model.is_error() {
            out.push_str("\n  Error fetching data.");
        }
        for row in view_model.rows() {
            // Rows without a fifa_id cannot be targeted by `favorite`
            let id = if row.fifa_id.is_empty() {
                "no id"
            } else {
                row.fifa_id.as_str()
            };
            out.push_str(&format!(
                "\n  {}  [{}]  ({})",
                row.label,
                row.favorite_label(),
                id
            ));
        }
        out
    }

    fn snapshot(&self, state: &MatchBrowserState) -> serde_json::Result<String> {
        serde_json::to_string(&state.matches.football_matches)
    }

    fn help(&self) -> &'static str {
        "refresh | search <text> | favorite <fifa id> | filter <value> | list | quit"
    }
}
