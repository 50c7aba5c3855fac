use crate::actions::LibraryAction;
use crate::state::BookFilterState;
use unistore::Reducer;

pub fn reduce_book_filter(mut state: BookFilterState, action: &LibraryAction) -> BookFilterState {
    if let LibraryAction::FilterBooks(criteria) = action {
        state.filter = criteria.clone();
    }
    state
}

impl Reducer<LibraryAction> for BookFilterState {
    fn reduce(self, action: &LibraryAction) -> Self {
        reduce_book_filter(self, action)
    }
}
