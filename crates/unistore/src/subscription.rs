//! Subscriber registry
//!
//! Listeners are notified in registration order. A notification round works
//! on a snapshot of the registry, so a listener may unsubscribe itself or any
//! other listener while being notified. Removed listeners are skipped for the
//! rest of the round.

use crate::dispatcher::Dispatcher;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Identifier of a registered listener, unique per store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<S, A> = Box<dyn FnMut(&S, &Dispatcher<A>)>;

struct Listener<S, A> {
    id: SubscriptionId,
    active: Cell<bool>,
    callback: RefCell<Callback<S, A>>,
}

type ListenerList<S, A> = RefCell<Vec<Rc<Listener<S, A>>>>;

pub(crate) struct Subscribers<S, A> {
    next_id: Cell<u64>,
    listeners: Rc<ListenerList<S, A>>,
}

impl<S: 'static, A: 'static> Subscribers<S, A> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn add(&self, callback: Callback<S, A>) -> Subscription {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);

        self.listeners.borrow_mut().push(Rc::new(Listener {
            id,
            active: Cell::new(true),
            callback: RefCell::new(callback),
        }));
        log::trace!("Subscriber {:?} registered", id);

        let registry = Rc::downgrade(&self.listeners);
        Subscription {
            id,
            unsubscribe: Some(Box::new(move || remove(&registry, id))),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub(crate) fn notify(&self, state: &S, dispatcher: &Dispatcher<A>) {
        let snapshot: Vec<_> = self.listeners.borrow().iter().cloned().collect();
        for listener in snapshot {
            if !listener.active.get() {
                continue;
            }
            match listener.callback.try_borrow_mut() {
                Ok(mut callback) => callback(state, dispatcher),
                Err(_) => log::warn!("Subscriber {:?} is already running, skipped", listener.id),
            }
        }
    }
}

fn remove<S, A>(registry: &Weak<ListenerList<S, A>>, id: SubscriptionId) {
    let Some(listeners) = registry.upgrade() else {
        return;
    };
    let mut listeners = listeners.borrow_mut();
    if let Some(listener) = listeners.iter().find(|l| l.id == id) {
        listener.active.set(false);
    }
    listeners.retain(|l| l.id != id);
    log::trace!("Subscriber {:?} removed", id);
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe)
///
/// Dropping the handle keeps the listener registered; call
/// [`unsubscribe`](Subscription::unsubscribe) to remove it.
pub struct Subscription {
    id: SubscriptionId,
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove the listener from its store
    ///
    /// Does nothing if the store is gone.
    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
