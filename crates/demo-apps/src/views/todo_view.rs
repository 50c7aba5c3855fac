use super::{common_command, resolve_id, split_command, Command, CommandError, ParseResult, View};
use crate::actions::TodoAction;
use crate::state::TodoState;

#[derive(Debug, Clone, Copy, Default)]
pub struct TodoView;

impl View for TodoView {
    type State = TodoState;
    type Action = TodoAction;

    fn title(&self) -> &'static str {
        "Todo List"
    }

    fn parse(&self, line: &str, state: &TodoState) -> ParseResult<TodoAction> {
        let Some((verb, rest)) = split_command(line) else {
            return Ok(None);
        };
        let ids = || state.todos.iter().map(|todo| &todo.id);

        match verb.as_str() {
            "add" => {
                if rest.is_empty() {
                    return Ok(None);
                }
                Ok(Some(Command::Dispatch(TodoAction::add_todo(rest))))
            }
            "toggle" | "complete" | "undo" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("toggle <id>"));
                }
                let id = resolve_id(rest, ids())?;
                Ok(Some(Command::Dispatch(TodoAction::ToggleTodo(id))))
            }
            "delete" | "rm" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("delete <id>"));
                }
                let id = resolve_id(rest, ids())?;
                Ok(Some(Command::Dispatch(TodoAction::DeleteTodo(id))))
            }
            other => common_command(other)
                .map(Some)
                .ok_or_else(|| CommandError::Unknown(other.to_string())),
        }
    }

    fn render(&self, state: &TodoState) -> String {
        let mut out = String::from(self.title());
        if state.todos.is_empty() {
            out.push_str("\n  (empty)");
        }
        for todo in &state.todos {
            let mark = if todo.status { "x" } else { " " };
            out.push_str(&format!("\n  [{}] {}  ({})", mark, todo.title, todo.id.short()));
        }
        out
    }

    fn snapshot(&self, state: &TodoState) -> serde_json::Result<String> {
        serde_json::to_string(&state.todos)
    }

    fn help(&self) -> &'static str {
        "add <title> | toggle <id> | delete <id> | list | quit"
    }
}
