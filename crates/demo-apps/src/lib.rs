//! Demo apps on the unistore core
//!
//! Four small apps share one architecture:
//!
//! | app | state | actions |
//! |---|---|---|
//! | counter | [`CounterState`](state::CounterState) | [`CounterAction`](actions::CounterAction) |
//! | todo list | [`TodoState`](state::TodoState) | [`TodoAction`](actions::TodoAction) |
//! | book library | [`LibraryState`](state::LibraryState) | [`LibraryAction`](actions::LibraryAction) |
//! | match browser | [`MatchBrowserState`](state::MatchBrowserState) | [`MatchAction`](actions::MatchAction) |
//!
//! Views parse user input into actions and render state; reducers are pure;
//! the only side effect, fetching the match listing, lives in
//! [`MatchFetchMiddleware`](middleware::MatchFetchMiddleware).

pub mod actions;
pub mod app;
pub mod domain_models;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod view_models;
pub mod views;
