//! SQLite-backed implementation of the durable state store.
//!
//! Each named slot is one row in `app_state`; values are stored as JSON
//! text. Writes upsert the whole row, so concurrent writers resolve to
//! last-write-wins at the row level.

use std::sync::Arc;

use chrono::Utc;
use rusqlite::params;
use serde_json::Value;
use taqwa_domain::Result;
use tracing::warn;

use crate::database::manager::DbManager;
use crate::errors::InfraError;

/// Durable key-value store over the `app_state` table.
pub struct SqliteStateStore {
    db: Arc<DbManager>,
}

impl SqliteStateStore {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

impl taqwa_core::StateStore for SqliteStateStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let conn = self.db.get_connection()?;

        let raw: Option<String> = match conn.query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            params![key],
            |row| row.get(0),
        ) {
            Ok(text) => Some(text),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(err) => return Err(InfraError::from(err).into()),
        };

        match raw {
            None => Ok(None),
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => Ok(Some(value)),
                Err(err) => {
                    // A row that no longer parses is unusable; report the
                    // slot as absent so callers fall back to defaults.
                    warn!(key, error = %err, "stored value is not valid json, treating as absent");
                    Ok(None)
                }
            },
        }
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let conn = self.db.get_connection()?;
        let text = serde_json::to_string(value)
            .map_err(|e| taqwa_domain::TaqwaError::Serialization(e.to_string()))?;

        conn.execute(
            "INSERT INTO app_state (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, text, Utc::now().timestamp()],
        )
        .map_err(InfraError::from)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.db.get_connection()?;
        conn.execute("DELETE FROM app_state WHERE key = ?1", params![key])
            .map_err(InfraError::from)?;
        Ok(())
    }
}
