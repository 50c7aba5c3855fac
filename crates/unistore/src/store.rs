use crate::action::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::Reducer;
use crate::subscription::{Subscribers, Subscription};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Store - holds application state and manages the Redux loop
///
/// The store is the single owner of state and the only place it changes:
/// - `dispatch` runs the middleware chain, then the reducer
/// - the reduced state replaces the old one as a whole
/// - subscribers are notified synchronously, in registration order
///
/// # Reentrancy
///
/// Subscribers and middleware receive a [`Dispatcher`]. Actions sent through
/// it are queued, and `dispatch` drains the queue only after the current
/// action has been reduced and every subscriber has seen the result.
/// Async tasks use the same queue; their actions are applied when the store
/// owner calls [`process_next`](Store::process_next) or
/// [`drain_pending`](Store::drain_pending).
pub struct Store<S, A> {
    state: S,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
    subscribers: Subscribers<S, A>,
    dispatcher: Dispatcher<A>,
    action_rx: UnboundedReceiver<A>,
}

impl<S, A> Store<S, A>
where
    S: Reducer<A> + Default + 'static,
    A: Action,
{
    pub fn new(initial_state: S) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            subscribers: Subscribers::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware<S, A>>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher<A> {
        &self.dispatcher
    }

    /// Register a listener called after every action that reaches the reducer
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&S, &Dispatcher<A>) + 'static,
    {
        self.subscribers.add(Box::new(listener))
    }

    /// Number of registered listeners
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Process an action, then every action queued while processing it
    pub fn dispatch(&mut self, action: A) {
        self.apply(action);
        self.drain_pending();
    }

    /// Apply all queued actions, returns how many were processed
    pub fn drain_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.apply(action);
            processed += 1;
        }
        processed
    }

    /// Wait for the next queued action and dispatch it
    ///
    /// Cancel safe: if the future is dropped before an action arrived,
    /// nothing is lost.
    pub async fn process_next(&mut self) {
        // The store holds a sender itself, so the channel never closes.
        if let Some(action) = self.action_rx.recv().await {
            self.dispatch(action);
        }
    }

    fn apply(&mut self, action: A) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                log::trace!("Action {} consumed by middleware", action.kind());
                return;
            }
        }

        let current = std::mem::take(&mut self.state);
        self.state = current.reduce(&action);

        self.subscribers.notify(&self.state, &self.dispatcher);
    }
}

impl<S, A> Default for Store<S, A>
where
    S: Reducer<A> + Default + 'static,
    A: Action,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}
