//! Tasbih counter registry - named counters with advisory targets
//!
//! The whole collection lives under the `tasbih_counters` slot and every
//! operation is a read-modify-write over the full list. Cardinality is
//! single digits to low tens, so this stays cheap.

use std::sync::Arc;

use parking_lot::RwLock;
use taqwa_domain::constants::TASBIH_COUNTERS_KEY;
use taqwa_domain::types::tasbih::default_tasbihs;
use taqwa_domain::Tasbih;
use tracing::warn;

use crate::events::{ChangeNotifier, SubscriptionId};
use crate::slots;
use crate::storage_ports::StateStore;

/// Tasbih counter registry service
pub struct TasbihService {
    store: Arc<dyn StateStore>,
    list: RwLock<Vec<Tasbih>>,
    changed: ChangeNotifier<Vec<Tasbih>>,
}

impl TasbihService {
    /// Create a registry hydrated from the store.
    ///
    /// On first run (no persisted slot) the built-in default set is seeded
    /// and persisted immediately so subsequent loads are stable. A corrupt
    /// slot falls back to the defaults in memory; the next mutation writes
    /// the full well-formed list back.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        let list = match store.get(TASBIH_COUNTERS_KEY) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(list) => list,
                Err(err) => {
                    warn!(key = TASBIH_COUNTERS_KEY, error = %err, "stored counters are malformed, using defaults");
                    default_tasbihs()
                }
            },
            Ok(None) => {
                let seed = default_tasbihs();
                slots::save(store.as_ref(), TASBIH_COUNTERS_KEY, &seed);
                seed
            }
            Err(err) => {
                warn!(key = TASBIH_COUNTERS_KEY, error = %err, "failed to read counters, using defaults");
                default_tasbihs()
            }
        };

        Self { store, list: RwLock::new(list), changed: ChangeNotifier::new() }
    }

    /// Counter by id.
    pub fn get(&self, id: &str) -> Option<Tasbih> {
        self.list.read().iter().find(|tasbih| tasbih.id == id).cloned()
    }

    /// All counters in display order.
    pub fn list(&self) -> Vec<Tasbih> {
        self.list.read().clone()
    }

    /// Increment a counter by one. Unknown ids are ignored. No upper clamp:
    /// the target is advisory, not a ceiling.
    pub fn increment(&self, id: &str) {
        self.mutate(|list| {
            if let Some(tasbih) = list.iter_mut().find(|tasbih| tasbih.id == id) {
                tasbih.count += 1;
            }
        });
    }

    /// Reset a counter to zero. Unknown ids are ignored.
    pub fn reset_count(&self, id: &str) {
        self.mutate(|list| {
            if let Some(tasbih) = list.iter_mut().find(|tasbih| tasbih.id == id) {
                tasbih.count = 0;
            }
        });
    }

    /// Append a counter to the collection.
    pub fn add(&self, tasbih: Tasbih) {
        self.mutate(|list| list.push(tasbih));
    }

    /// Replace the counter with the same id. Unknown ids are ignored.
    pub fn update(&self, updated: Tasbih) {
        self.mutate(|list| {
            if let Some(tasbih) = list.iter_mut().find(|tasbih| tasbih.id == updated.id) {
                *tasbih = updated.clone();
            }
        });
    }

    /// Remove the counter with the given id; a no-op when absent.
    pub fn remove(&self, id: &str) {
        self.mutate(|list| list.retain(|tasbih| tasbih.id != id));
    }

    /// Subscribe to republished counter state.
    pub fn on_change(
        &self,
        listener: impl Fn(&Vec<Tasbih>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.changed.subscribe(listener)
    }

    /// Read-modify-write over the full collection, then persist and
    /// republish.
    fn mutate(&self, apply: impl FnOnce(&mut Vec<Tasbih>)) {
        let snapshot = {
            let mut list = self.list.write();
            apply(&mut list);
            list.clone()
        };

        slots::save(self.store.as_ref(), TASBIH_COUNTERS_KEY, &snapshot);
        self.changed.notify(&snapshot);
    }
}
