use super::{common_command, split_command, Command, CommandError, ParseResult, View};
use crate::actions::CounterAction;
use crate::state::CounterState;

#[derive(Debug, Clone, Copy, Default)]
pub struct CounterView;

impl View for CounterView {
    type State = CounterState;
    type Action = CounterAction;

    fn title(&self) -> &'static str {
        "Counter"
    }

    fn parse(&self, line: &str, _state: &CounterState) -> ParseResult<CounterAction> {
        let Some((verb, _)) = split_command(line) else {
            return Ok(None);
        };
        match verb.as_str() {
            "increment" | "inc" | "+" => Ok(Some(Command::Dispatch(CounterAction::Increment))),
            "decrement" | "dec" | "-" => Ok(Some(Command::Dispatch(CounterAction::Decrement))),
            other => common_command(other)
                .map(Some)
                .ok_or_else(|| CommandError::Unknown(other.to_string())),
        }
    }

    fn render(&self, state: &CounterState) -> String {
        format!("Counter: {}", state.count)
    }

    fn snapshot(&self, state: &CounterState) -> serde_json::Result<String> {
        serde_json::to_string(state)
    }

    fn help(&self) -> &'static str {
        "increment | decrement | list | quit"
    }
}
