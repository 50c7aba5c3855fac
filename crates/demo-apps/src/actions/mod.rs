//! Actions module
//!
//! One action enum per app. Variants are tagged with their `kind`
//! (SCREAMING_SNAKE_CASE variant name), e.g. `TodoAction::ToggleTodo`
//! has kind `"TOGGLE_TODO"`.

pub mod counter;
pub mod library;
pub mod matches;
pub mod todo;

pub use counter::CounterAction;
pub use library::LibraryAction;
pub use matches::MatchAction;
pub use todo::TodoAction;
