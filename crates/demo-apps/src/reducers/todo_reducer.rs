//! Todo Reducer

use crate::actions::TodoAction;
use crate::state::TodoState;
use unistore::Reducer;

/// Reduce todo actions
///
/// Unknown ids are a no-op. Titles are not validated here.
pub fn reduce_todos(mut state: TodoState, action: &TodoAction) -> TodoState {
    match action {
        TodoAction::AddTodo(todo) => {
            log::debug!("Adding todo {}: {:?}", todo.id, todo.title);
            state.todos.push(todo.clone());
        }
        TodoAction::ToggleTodo(id) => {
            if let Some(todo) = state.todos.iter_mut().find(|todo| todo.id == *id) {
                *todo = todo.toggled();
            } else {
                log::debug!("Toggle: todo {} not found", id);
            }
        }
        TodoAction::DeleteTodo(id) => {
            state.todos.retain(|todo| todo.id != *id);
        }
    }
    state
}

impl Reducer<TodoAction> for TodoState {
    fn reduce(self, action: &TodoAction) -> Self {
        reduce_todos(self, action)
    }
}
