//! Port interface for the durable key-value store
//!
//! This trait defines the boundary between the state services and the
//! persistence implementation.

use serde_json::Value;
use taqwa_domain::Result;

/// Synchronous key-value port over the local durable store.
///
/// Writes are last-write-wins per key, ordered by call order, and either
/// fully succeed or leave the prior value unchanged. There is no suspension
/// point between a caller's read and write, so a read-modify-write sequence
/// within one event-loop turn cannot interleave with another.
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Implementations report a malformed stored value as `Ok(None)` (and
    /// log it) so callers can fall back to default construction.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &Value) -> Result<()>;

    /// Delete the value stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<()>;
}
