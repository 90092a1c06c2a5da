//! Change notification for service state
//!
//! The UI layer used to bind to reactive signal cells; here each service
//! exposes a [`ChangeNotifier`] instead, so any view layer can subscribe
//! without the core depending on a specific reactive framework. Callbacks
//! run synchronously on the mutating call.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Opaque handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Ordered list of observers notified after every committed mutation.
pub struct ChangeNotifier<T> {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(u64, Listener<T>)>>,
}

impl<T> ChangeNotifier<T> {
    pub fn new() -> Self {
        Self { next_id: AtomicU64::new(0), listeners: RwLock::new(Vec::new()) }
    }

    /// Register a listener; it stays active until unsubscribed.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.write().push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    /// Drop a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.write().retain(|(listener_id, _)| *listener_id != id.0);
    }

    /// Invoke every listener with the new state, in subscription order.
    pub fn notify(&self, value: &T) {
        for (_, listener) in self.listeners.read().iter() {
            listener(value);
        }
    }
}

impl<T> Default for ChangeNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}
