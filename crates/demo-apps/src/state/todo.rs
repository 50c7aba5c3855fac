use crate::domain_models::{RecordId, Todo};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoState {
    pub todos: Vec<Todo>,
}

impl TodoState {
    pub fn find(&self, id: RecordId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }
}
