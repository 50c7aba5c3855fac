//! Views
//!
//! Line-oriented view bindings. A view turns one line of user input into a
//! [`Command`] (usually an action to dispatch) and renders state as text.
//! Empty or whitespace-only required input is ignored without an error.

use crate::domain_models::RecordId;
use thiserror::Error;

pub mod counter_view;
pub mod library_view;
pub mod match_view;
pub mod todo_view;

pub use counter_view::CounterView;
pub use library_view::LibraryView;
pub use match_view::MatchView;
pub use todo_view::TodoView;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Command<A> {
    /// Dispatch this action to the store
    Dispatch(A),
    /// Print the rendered view
    Show,
    /// Leave the app
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("No record matches id {0}")]
    UnknownId(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub type ParseResult<A> = Result<Option<Command<A>>, CommandError>;

/// View trait - the interface between a store and its user
pub trait View {
    type State;
    type Action;

    /// Name shown in the header
    fn title(&self) -> &'static str;

    /// Actions dispatched once when the app starts
    fn startup_actions(&self) -> Vec<Self::Action> {
        Vec::new()
    }

    /// Parse one line of input against the current state
    fn parse(&self, line: &str, state: &Self::State) -> ParseResult<Self::Action>;

    /// Human readable rendering of the state
    fn render(&self, state: &Self::State) -> String;

    /// JSON of the slice printed after every dispatch
    fn snapshot(&self, state: &Self::State) -> serde_json::Result<String>;

    /// One-line summary of the commands
    fn help(&self) -> &'static str;
}

/// Split a line into its lowercase verb and the trimmed remainder
pub(crate) fn split_command(line: &str) -> Option<(String, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    Some((verb.to_lowercase(), rest.trim()))
}

/// Commands every view understands; `None` if `verb` is not one of them
pub(crate) fn common_command<A>(verb: &str) -> Option<Command<A>> {
    match verb {
        "quit" | "exit" => Some(Command::Quit),
        "list" | "show" => Some(Command::Show),
        _ => None,
    }
}

/// Resolve a full id, or a unique prefix of one of `ids`
///
/// A well-formed id is returned even if no record has it.
pub(crate) fn resolve_id<'a>(
    arg: &str,
    ids: impl IntoIterator<Item = &'a RecordId>,
) -> Result<RecordId, CommandError> {
    if let Ok(id) = arg.parse::<RecordId>() {
        return Ok(id);
    }

    let prefix = arg.replace('-', "").to_lowercase();
    let mut candidates = ids
        .into_iter()
        .filter(|id| id.to_string().replace('-', "").starts_with(&prefix));
    match (candidates.next(), candidates.next()) {
        (Some(id), None) => Ok(*id),
        _ => Err(CommandError::UnknownId(arg.to_string())),
    }
}
