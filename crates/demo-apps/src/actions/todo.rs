//! Actions for the todo list.

use crate::domain_models::{RecordId, Todo};
use unistore::Action;

#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new todo (created with its id already assigned)
    AddTodo(Todo),

    /// Flip the status of the todo with this id
    ToggleTodo(RecordId),

    /// Remove the todo with this id
    DeleteTodo(RecordId),
}

impl TodoAction {
    /// Create an `ADD_TODO` action for a new open todo
    pub fn add_todo(title: impl Into<String>) -> Self {
        TodoAction::AddTodo(Todo::new(title))
    }

    /// Id of the record created by an `ADD_TODO` action
    pub fn created_id(&self) -> Option<RecordId> {
        match self {
            TodoAction::AddTodo(todo) => Some(todo.id),
            _ => None,
        }
    }
}

impl Action for TodoAction {
    fn kind(&self) -> &'static str {
        self.into()
    }
}
