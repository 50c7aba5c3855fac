//! Actions for the counter.

use unistore::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    Increment,
    Decrement,
}

impl Action for CounterAction {
    fn kind(&self) -> &'static str {
        self.into()
    }
}
