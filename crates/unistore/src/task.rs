//! Async task runner
//!
//! Wraps one fallible async operation into a deterministic sequence of
//! actions:
//!
//! ```text
//! Idle ──spawn──► Loading ──Ok──► Success
//!                    │
//!                    └────Err──► Failure
//! ```
//!
//! The request action is queued before the operation starts, so the view can
//! show a loading indicator even if the operation never completes. There is
//! no retry, no timeout and no cancellation. Overlapping tasks race, and the
//! action of the task that resolves last is applied last.

use crate::action::Action;
use crate::dispatcher::Dispatcher;
use std::fmt::Display;
use std::future::Future;
use tokio::task::JoinHandle;

/// Runs async operations and reports their lifecycle through a [`Dispatcher`]
pub struct TaskRunner<A> {
    dispatcher: Dispatcher<A>,
}

impl<A: Action> TaskRunner<A> {
    pub fn new(dispatcher: Dispatcher<A>) -> Self {
        Self { dispatcher }
    }

    /// Queue `request`, then run `operation` on the tokio runtime
    ///
    /// On completion queues `on_success(value)` or `on_failure(message)`,
    /// where `message` is the error's `Display` output.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T, E, Fut, OnSuccess, OnFailure>(
        &self,
        request: A,
        operation: Fut,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> JoinHandle<()>
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Display + Send + 'static,
        OnSuccess: FnOnce(T) -> A + Send + 'static,
        OnFailure: FnOnce(String) -> A + Send + 'static,
    {
        log::debug!("TaskRunner: starting task with {}", request.kind());
        self.dispatcher.dispatch(request);

        let dispatcher = self.dispatcher.clone();
        tokio::spawn(async move {
            let action = match operation.await {
                Ok(value) => on_success(value),
                Err(e) => {
                    let message = e.to_string();
                    log::warn!("TaskRunner: task failed: {}", message);
                    on_failure(message)
                }
            };
            log::debug!("TaskRunner: task finished with {}", action.kind());
            dispatcher.dispatch(action);
        })
    }
}

impl<A> Clone for TaskRunner<A> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}
