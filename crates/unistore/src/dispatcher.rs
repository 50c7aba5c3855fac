//! Dispatcher for queued action dispatch
//!
//! Subscribers, middleware and async tasks cannot borrow the store while it
//! is dispatching. They get a Dispatcher instead: actions sent through it are
//! queued and applied by the store, in FIFO order, after the current dispatch
//! (including all of its subscriber notifications) has completed.

use tokio::sync::mpsc::UnboundedSender;

/// Dispatcher for queuing actions into a [`Store`](crate::Store)
///
/// Cheap to clone and `Send`, so it can be moved into spawned tasks.
pub struct Dispatcher<A> {
    action_tx: UnboundedSender<A>,
}

impl<A> Dispatcher<A> {
    /// Create a dispatcher feeding the given channel
    ///
    /// The receiving end belongs to the store.
    pub fn new(action_tx: UnboundedSender<A>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    ///
    /// If the store has been dropped the action is discarded and logged.
    pub fn dispatch(&self, action: A) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            action_tx: self.action_tx.clone(),
        }
    }
}
