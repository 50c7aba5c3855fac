//! View models - presentation logic derived from state

pub mod match_list_view_model;

pub use match_list_view_model::{filtered_matches, MatchListViewModel, MatchRow};
