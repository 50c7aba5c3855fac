//! Redux-style unidirectional store
//!
//! This crate provides the state-update core shared by the demo apps:
//! - [`Action`]: typed descriptor of an intended state change
//! - [`Reducer`]: pure `(state, &action) -> state` transition, composed with [`combine_reducers!`]
//! - [`Store`]: owns the state, runs middleware, reduces, notifies subscribers
//! - [`Dispatcher`]: cloneable handle that queues actions for the store
//! - [`TaskRunner`]: turns one async call into request / success / failure actions
//!
//! # Architecture
//!
//! ```text
//! View ──dispatch──► Middleware chain ──► Reducer ──► new State ──► Subscribers
//!   ▲                     │                                            │
//!   │                     └── Dispatcher (queued) ◄── TaskRunner ◄─────┘
//!   └──────────────────────────── state() ─────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use unistore::{Action, Reducer, Store};
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {
//!     fn kind(&self) -> &'static str {
//!         "INCREMENT"
//!     }
//! }
//!
//! #[derive(Debug, Default)]
//! struct Counter {
//!     count: i64,
//! }
//!
//! impl Reducer<CounterAction> for Counter {
//!     fn reduce(mut self, action: &CounterAction) -> Self {
//!         match action {
//!             CounterAction::Increment => self.count += 1,
//!         }
//!         self
//!     }
//! }
//!
//! let mut store = Store::new(Counter::default());
//! store.dispatch(CounterAction::Increment);
//! assert_eq!(store.state().count, 1);
//! ```

pub mod action;
pub mod dispatcher;
pub mod middleware;
pub mod reducer;
pub mod store;
pub mod subscription;
pub mod task;

#[cfg(test)]
mod test_support;

pub use action::Action;
pub use dispatcher::Dispatcher;
pub use middleware::{LoggingMiddleware, Middleware};
pub use reducer::Reducer;
pub use store::Store;
pub use subscription::{Subscription, SubscriptionId};
pub use task::TaskRunner;
