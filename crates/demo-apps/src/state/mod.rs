//! Application State Module
//!
//! Each app's state is a struct whose fields are its slices. Initial values
//! come from `Default`.

mod counter;
mod library;
mod matches;
mod todo;

pub use counter::CounterState;
pub use library::{BookFilterState, BooksState, LibraryState};
pub use matches::{MatchBrowserState, MatchFilterState, MatchesState};
pub use todo::TodoState;
