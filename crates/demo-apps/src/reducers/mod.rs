//! Reducers
//!
//! Pure functions `(slice, &action) -> slice`, one per slice, wired to the
//! slice types through `unistore::Reducer`. Composite app states are
//! assembled from their slices with `combine_reducers!`.

pub mod book_filter_reducer;
pub mod book_reducer;
pub mod counter_reducer;
pub mod match_filter_reducer;
pub mod match_reducer;
pub mod todo_reducer;

use crate::actions::{LibraryAction, MatchAction};
use crate::state::{LibraryState, MatchBrowserState};
use unistore::combine_reducers;

combine_reducers!(LibraryState, LibraryAction { books, filter });
combine_reducers!(MatchBrowserState, MatchAction { matches, filter });
