//! Match Fetch Middleware
//!
//! Turns `FETCH_MATCHES` into the fetch lifecycle:
//! - queues `FETCH_MATCHES_REQUEST` right away
//! - fetches the configured listing page on a tokio task
//! - queues `FETCH_MATCHES_SUCCESS` or `FETCH_MATCHES_FAILURE`
//!
//! A second `FETCH_MATCHES` while one is in flight starts another fetch;
//! whichever resolves last wins.

use crate::actions::MatchAction;
use crate::state::MatchBrowserState;
use match_client::MatchClient;
use std::sync::Arc;
use unistore::{Dispatcher, Middleware, TaskRunner};

pub struct MatchFetchMiddleware {
    client: Arc<dyn MatchClient>,
    page: u32,
}

impl MatchFetchMiddleware {
    pub fn new(client: Arc<dyn MatchClient>, page: u32) -> Self {
        Self { client, page }
    }
}

impl Middleware<MatchBrowserState, MatchAction> for MatchFetchMiddleware {
    fn handle(
        &mut self,
        action: &MatchAction,
        _state: &MatchBrowserState,
        dispatcher: &Dispatcher<MatchAction>,
    ) -> bool {
        match action {
            MatchAction::FetchMatches => {
                log::info!("MatchFetchMiddleware: fetching page {}", self.page);
                let client = self.client.clone();
                let page = self.page;

                TaskRunner::new(dispatcher.clone()).spawn(
                    MatchAction::FetchMatchesRequest,
                    async move { client.fetch_matches(page).await },
                    MatchAction::FetchMatchesSuccess,
                    MatchAction::FetchMatchesFailure,
                );

                false // Consumed: the lifecycle actions carry the state changes
            }
            _ => true,
        }
    }
}
