use crate::actions::MatchAction;
use crate::state::MatchFilterState;
use unistore::Reducer;

pub fn reduce_match_filter(mut state: MatchFilterState, action: &MatchAction) -> MatchFilterState {
    match action {
        MatchAction::SetSearchQuery(query) => state.search_query = query.clone(),
        MatchAction::SetFilter(filter) => state.filter = filter.clone(),
        _ => {}
    }
    state
}

impl Reducer<MatchAction> for MatchFilterState {
    fn reduce(self, action: &MatchAction) -> Self {
        reduce_match_filter(self, action)
    }
}
