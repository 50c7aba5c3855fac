//! Middleware - hooks that run before the reducer
//!
//! ```text
//! Action → Middleware Chain → Reducer → State → Subscribers
//! ```
//!
//! Each middleware can inspect the action and the current state, queue new
//! actions through the [`Dispatcher`], start side effects, or consume the
//! action so it never reaches the reducer.

use crate::action::Action;
use crate::dispatcher::Dispatcher;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware<S, A> {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current state (read-only)
    /// - `dispatcher`: Use to queue follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &A, state: &S, dispatcher: &Dispatcher<A>) -> bool;
}

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S, A: Action> Middleware<S, A> for LoggingMiddleware {
    fn handle(&mut self, action: &A, _state: &S, _dispatcher: &Dispatcher<A>) -> bool {
        log::debug!("Action {}: {:?}", action.kind(), action);
        true
    }
}
