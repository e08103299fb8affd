//! Shared event queue handle and cancellable subscriptions.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::event::{EventBatch, EventKinds, EventQueue, EventStats, SubscriptionId, WorkbenchEvent};

/// Cloneable handle to the host's event queue.
///
/// Collaborators keep a clone to announce changes; the layout keeps
/// [`Subscription`]s to declare which changes it reacts to.
#[derive(Clone, Default)]
pub struct SharedEventQueue {
    inner: Arc<Mutex<EventQueue>>,
}

impl SharedEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: WorkbenchEvent) {
        self.inner.lock().push(event);
    }

    /// Take every queued event. The lock is released before the batch is returned.
    pub fn drain(&self) -> EventBatch {
        self.inner.lock().drain()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn subscription_count(&self) -> usize {
        self.inner.lock().subscription_count()
    }

    pub fn stats(&self) -> EventStats {
        self.inner.lock().stats().clone()
    }

    /// Start receiving events of the given kinds.
    pub fn subscribe(&self, kinds: EventKinds) -> Subscription {
        let id = self.inner.lock().add_subscription(kinds);
        Subscription {
            id,
            kinds,
            queue: Some(Arc::downgrade(&self.inner)),
        }
    }
}

impl std::fmt::Debug for SharedEventQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedEventQueue")
            .field("len", &self.len())
            .field("subscriptions", &self.subscription_count())
            .finish()
    }
}

/// A live interest in some event kinds. Disposing (or dropping) cancels it.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    kinds: EventKinds,
    queue: Option<Weak<Mutex<EventQueue>>>,
}

impl Subscription {
    pub fn kinds(&self) -> EventKinds {
        self.kinds
    }

    pub fn is_active(&self) -> bool {
        self.queue.as_ref().is_some_and(|q| q.strong_count() > 0)
    }

    /// Cancel the subscription. Further calls do nothing.
    pub fn dispose(&mut self) {
        if let Some(queue) = self.queue.take().and_then(|q| q.upgrade()) {
            queue.lock().remove_subscription(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Collects subscriptions so they can be cancelled together.
#[derive(Debug, Default)]
pub struct DisposableStore {
    subscriptions: Vec<Subscription>,
    disposed: bool,
}

impl DisposableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a subscription. Adding to a disposed store cancels it immediately.
    pub fn add(&mut self, mut subscription: Subscription) {
        if self.disposed {
            tracing::warn!("Subscription added to a disposed store, cancelling it");
            subscription.dispose();
            return;
        }
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Cancel every tracked subscription exactly once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for mut subscription in self.subscriptions.drain(..) {
            subscription.dispose();
        }
    }
}
