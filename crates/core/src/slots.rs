//! Helpers for reading and writing JSON storage slots
//!
//! Every service persists its whole state under one named slot. These
//! helpers centralize the failure policy: corrupt reads fall back to the
//! default value, failed writes keep the in-memory state authoritative for
//! the session. Both paths are logged and neither is surfaced to callers.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

use crate::storage_ports::StateStore;

/// Read and decode a slot, substituting `T::default()` on absence, read
/// failure, or unexpected shape.
pub(crate) fn load_or_default<T>(store: &dyn StateStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(key, error = %err, "stored value has unexpected shape, using default");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            warn!(key, error = %err, "failed to read storage slot, using default");
            T::default()
        }
    }
}

/// Encode and write a slot. Failures are logged; the caller's in-memory
/// state remains correct for the session but will not survive a reload.
pub(crate) fn save<T>(store: &dyn StateStore, key: &str, value: &T)
where
    T: Serialize,
{
    let json = match serde_json::to_value(value) {
        Ok(json) => json,
        Err(err) => {
            error!(key, error = %err, "failed to serialize value for storage slot");
            return;
        }
    };

    if let Err(err) = store.set(key, &json) {
        error!(key, error = %err, "failed to persist storage slot, continuing in degraded mode");
    }
}
