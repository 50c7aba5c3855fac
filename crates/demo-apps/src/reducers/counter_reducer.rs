use crate::actions::CounterAction;
use crate::state::CounterState;
use unistore::Reducer;

/// Saturates at the bounds of `i64`
pub fn reduce_counter(mut state: CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => state.count = state.count.saturating_add(1),
        CounterAction::Decrement => state.count = state.count.saturating_sub(1),
    }
    state
}

impl Reducer<CounterAction> for CounterState {
    fn reduce(self, action: &CounterAction) -> Self {
        reduce_counter(self, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unistore::Store;

    #[test]
    fn test_increment_increment_decrement() {
        let mut store = Store::new(CounterState::default());
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Decrement);

        assert_eq!(*store.state(), CounterState { count: 1 });
    }

    #[test]
    fn test_counter_goes_negative() {
        let state = reduce_counter(CounterState::default(), &CounterAction::Decrement);
        assert_eq!(state.count, -1);
    }

    #[test]
    fn test_counter_saturates_at_bounds() {
        let top = CounterState { count: i64::MAX };
        assert_eq!(reduce_counter(top, &CounterAction::Increment), top);

        let bottom = CounterState { count: i64::MIN };
        assert_eq!(reduce_counter(bottom, &CounterAction::Decrement), bottom);
    }
}
