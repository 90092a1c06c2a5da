//! Shared fakes for core service tests
//!
//! Provides an in-memory store and a pinned clock so the services can be
//! exercised deterministically without a database or the wall clock.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;
use serde_json::Value;
use taqwa_core::{Clock, StateStore};
use taqwa_domain::{Result, TaqwaError};

/// In-memory `StateStore` fake with last-write-wins semantics.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
    fail_writes: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience helper for seeding a slot before a service is built.
    pub fn with_slot(self, key: &str, value: Value) -> Self {
        self.values.lock().insert(key.to_owned(), value);
        self
    }

    /// Raw slot contents, for asserting what was persisted.
    pub fn raw(&self, key: &str) -> Option<Value> {
        self.values.lock().get(key).cloned()
    }

    /// Make every subsequent `set` fail, simulating a quota error.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock() = fail;
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        if *self.fail_writes.lock() {
            return Err(TaqwaError::Storage("quota exceeded".into()));
        }
        self.values.lock().insert(key.to_owned(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}

/// Clock pinned to a settable calendar day.
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today: Mutex::new(today) }
    }

    /// Move the pinned day, e.g. to simulate the app running overnight.
    pub fn set_today(&self, today: NaiveDate) {
        *self.today.lock() = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock()
    }

    fn now(&self) -> DateTime<Utc> {
        let today = *self.today.lock();
        Utc.from_utc_datetime(&today.and_hms_opt(12, 0, 0).unwrap_or_default())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Route service logs to the test writer. Safe to call per test; only the
/// first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
