//! Shared fixtures for the crate's unit tests

use crate::{Action, Reducer};

#[derive(Debug, Clone, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TestAction {
    Increment,
    Record(String),
    Noop,
}

impl Action for TestAction {
    fn kind(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CounterSlice {
    pub count: i64,
}

impl Reducer<TestAction> for CounterSlice {
    fn reduce(mut self, action: &TestAction) -> Self {
        if let TestAction::Increment = action {
            self.count += 1;
        }
        self
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct JournalSlice {
    pub entries: Vec<String>,
}

impl Reducer<TestAction> for JournalSlice {
    fn reduce(mut self, action: &TestAction) -> Self {
        if let TestAction::Record(entry) = action {
            self.entries.push(entry.clone());
        }
        self
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TestState {
    pub counter: CounterSlice,
    pub journal: JournalSlice,
}

crate::combine_reducers!(TestState, TestAction { counter, journal });
