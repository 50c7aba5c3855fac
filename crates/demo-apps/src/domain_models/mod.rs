//! Domain models
//!
//! Records the apps keep in state.

mod book;
mod record_id;
mod todo;

pub use book::{Book, BookPatch};
pub use match_client::FootballMatch;
pub use record_id::RecordId;
pub use todo::Todo;
