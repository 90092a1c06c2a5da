//! Preference cache - small scalar settings behind fixed keys
//!
//! Each cell reads as the last-set value or a fixed default. Writes update
//! the cell synchronously and persist under the cell's own slot. Values are
//! trusted to come from enumerated option sets; no validation here.

use std::sync::Arc;

use parking_lot::RwLock;
use taqwa_domain::constants::{
    DEFAULT_HADITH_SOURCE, DEFAULT_QURAN_TRANSLATOR, HADITH_SOURCE_KEY, HANAFI_PREFERENCE_KEY,
    QURAN_TRANSLATOR_KEY, SHOW_INTRO_KEY, THEME_KEY,
};
use taqwa_domain::ReadingPosition;
use tracing::warn;

use crate::slots;
use crate::storage_ports::StateStore;

/// Preference cache service
pub struct PreferencesService {
    store: Arc<dyn StateStore>,
    quran_translator: RwLock<String>,
    hadith_source: RwLock<String>,
    theme: RwLock<Option<String>>,
    show_intro: RwLock<bool>,
    hanafi_preference: RwLock<bool>,
}

impl PreferencesService {
    /// Create a cache hydrated from the store, with fixed defaults for
    /// never-set cells.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        let quran_translator =
            load_scalar(store.as_ref(), QURAN_TRANSLATOR_KEY).unwrap_or_else(|| DEFAULT_QURAN_TRANSLATOR.to_owned());
        let hadith_source =
            load_scalar(store.as_ref(), HADITH_SOURCE_KEY).unwrap_or_else(|| DEFAULT_HADITH_SOURCE.to_owned());
        let theme = load_scalar(store.as_ref(), THEME_KEY);
        let show_intro = load_scalar(store.as_ref(), SHOW_INTRO_KEY).unwrap_or(true);
        let hanafi_preference = load_scalar(store.as_ref(), HANAFI_PREFERENCE_KEY).unwrap_or(false);

        Self {
            store,
            quran_translator: RwLock::new(quran_translator),
            hadith_source: RwLock::new(hadith_source),
            theme: RwLock::new(theme),
            show_intro: RwLock::new(show_intro),
            hanafi_preference: RwLock::new(hanafi_preference),
        }
    }

    /// Selected Quran translator name.
    pub fn quran_translator(&self) -> String {
        self.quran_translator.read().clone()
    }

    pub fn set_quran_translator(&self, value: impl Into<String>) {
        let value = value.into();
        slots::save(self.store.as_ref(), QURAN_TRANSLATOR_KEY, &value);
        *self.quran_translator.write() = value;
    }

    /// Selected hadith source name.
    pub fn hadith_source(&self) -> String {
        self.hadith_source.read().clone()
    }

    pub fn set_hadith_source(&self, value: impl Into<String>) {
        let value = value.into();
        slots::save(self.store.as_ref(), HADITH_SOURCE_KEY, &value);
        *self.hadith_source.write() = value;
    }

    /// Selected theme; `None` means "follow the system theme".
    pub fn theme(&self) -> Option<String> {
        self.theme.read().clone()
    }

    pub fn set_theme(&self, value: impl Into<String>) {
        let value = value.into();
        slots::save(self.store.as_ref(), THEME_KEY, &value);
        *self.theme.write() = Some(value);
    }

    /// Whether the welcome intro should still be shown.
    pub fn show_intro(&self) -> bool {
        *self.show_intro.read()
    }

    pub fn set_show_intro(&self, value: bool) {
        slots::save(self.store.as_ref(), SHOW_INTRO_KEY, &value);
        *self.show_intro.write() = value;
    }

    /// Hanafi juristic preference for Asr calculation.
    pub fn hanafi_preference(&self) -> bool {
        *self.hanafi_preference.read()
    }

    pub fn set_hanafi_preference(&self, value: bool) {
        slots::save(self.store.as_ref(), HANAFI_PREFERENCE_KEY, &value);
        *self.hanafi_preference.write() = value;
    }

    /// Saved page/zoom for one library document, keyed by the document's own
    /// storage key. Missing or corrupt records read as the default position.
    pub fn reading_position(&self, storage_key: &str) -> ReadingPosition {
        load_scalar(self.store.as_ref(), storage_key).unwrap_or_default()
    }

    pub fn set_reading_position(&self, storage_key: &str, position: ReadingPosition) {
        slots::save(self.store.as_ref(), storage_key, &position);
    }
}

/// Read one scalar cell; absent, unreadable, or mis-shaped values read as
/// `None` so the caller can substitute its fixed default.
fn load_scalar<T: serde::de::DeserializeOwned>(store: &dyn StateStore, key: &str) -> Option<T> {
    match store.get(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(key, error = %err, "stored preference has unexpected shape, using default");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!(key, error = %err, "failed to read preference, using default");
            None
        }
    }
}
