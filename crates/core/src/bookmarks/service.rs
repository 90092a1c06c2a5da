//! Bookmark ledger - idempotent toggles over two independent sets
//!
//! Hadith bookmarks are content-id strings under `bookmarkedHadiths`; ayah
//! bookmarks are composite surah/ayah keys under `bookmarkedAyahs`. Both are
//! sets in insertion order, persisted as JSON arrays. The ledger stores only
//! identifiers; callers hydrate full records from the content service.

use std::sync::Arc;

use parking_lot::RwLock;
use taqwa_domain::constants::{BOOKMARKED_AYAHS_KEY, BOOKMARKED_HADITHS_KEY};
use taqwa_domain::AyahKey;

use crate::events::{ChangeNotifier, SubscriptionId};
use crate::slots;
use crate::storage_ports::StateStore;

/// Bookmark ledger service
///
/// A corrupt persisted array loads as the empty set (logged) and is
/// overwritten by the next successful write, so the slot self-heals.
pub struct BookmarkService {
    store: Arc<dyn StateStore>,
    hadiths: RwLock<Vec<String>>,
    ayahs: RwLock<Vec<AyahKey>>,
    hadiths_changed: ChangeNotifier<Vec<String>>,
    ayahs_changed: ChangeNotifier<Vec<AyahKey>>,
}

impl BookmarkService {
    /// Create a ledger hydrated from the store.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        let hadiths: Vec<String> = slots::load_or_default(store.as_ref(), BOOKMARKED_HADITHS_KEY);
        let ayahs: Vec<AyahKey> = slots::load_or_default(store.as_ref(), BOOKMARKED_AYAHS_KEY);

        Self {
            store,
            hadiths: RwLock::new(hadiths),
            ayahs: RwLock::new(ayahs),
            hadiths_changed: ChangeNotifier::new(),
            ayahs_changed: ChangeNotifier::new(),
        }
    }

    /* ---------------------------------------------------------------------- */
    /* Hadith bookmarks (discrete content ids) */
    /* ---------------------------------------------------------------------- */

    /// Pure membership test.
    pub fn is_bookmarked_hadith(&self, hadith_id: &str) -> bool {
        self.hadiths.read().iter().any(|id| id == hadith_id)
    }

    /// Add the id if absent, remove it if present. Calling twice returns to
    /// the original membership state.
    pub fn toggle_hadith(&self, hadith_id: &str) {
        let snapshot = {
            let mut hadiths = self.hadiths.write();
            match hadiths.iter().position(|id| id == hadith_id) {
                Some(idx) => {
                    hadiths.remove(idx);
                }
                None => hadiths.push(hadith_id.to_owned()),
            }
            hadiths.clone()
        };

        slots::save(self.store.as_ref(), BOOKMARKED_HADITHS_KEY, &snapshot);
        self.hadiths_changed.notify(&snapshot);
    }

    /// Unconditional removal; a no-op when the id is absent.
    pub fn remove_hadith(&self, hadith_id: &str) {
        let snapshot = {
            let mut hadiths = self.hadiths.write();
            hadiths.retain(|id| id != hadith_id);
            hadiths.clone()
        };

        slots::save(self.store.as_ref(), BOOKMARKED_HADITHS_KEY, &snapshot);
        self.hadiths_changed.notify(&snapshot);
    }

    /// The persisted raw identifier list, used by callers to re-fetch full
    /// content records.
    pub fn hadith_ids(&self) -> Vec<String> {
        slots::load_or_default(self.store.as_ref(), BOOKMARKED_HADITHS_KEY)
    }

    /// Subscribe to republished hadith bookmark state.
    pub fn on_hadiths_change(
        &self,
        listener: impl Fn(&Vec<String>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.hadiths_changed.subscribe(listener)
    }

    /* ---------------------------------------------------------------------- */
    /* Ayah bookmarks (composite keys) */
    /* ---------------------------------------------------------------------- */

    /// Pure membership test under structural equality.
    pub fn is_bookmarked_ayah(&self, key: AyahKey) -> bool {
        self.ayahs.read().iter().any(|bookmarked| *bookmarked == key)
    }

    /// Add the key if absent, remove it if present. Comparison is
    /// field-by-field, never identity.
    pub fn toggle_ayah(&self, key: AyahKey) {
        let snapshot = {
            let mut ayahs = self.ayahs.write();
            match ayahs.iter().position(|bookmarked| *bookmarked == key) {
                Some(idx) => {
                    ayahs.remove(idx);
                }
                None => ayahs.push(key),
            }
            ayahs.clone()
        };

        slots::save(self.store.as_ref(), BOOKMARKED_AYAHS_KEY, &snapshot);
        self.ayahs_changed.notify(&snapshot);
    }

    /// Unconditional removal; a no-op when the key is absent.
    pub fn remove_ayah(&self, key: AyahKey) {
        let snapshot = {
            let mut ayahs = self.ayahs.write();
            ayahs.retain(|bookmarked| *bookmarked != key);
            ayahs.clone()
        };

        slots::save(self.store.as_ref(), BOOKMARKED_AYAHS_KEY, &snapshot);
        self.ayahs_changed.notify(&snapshot);
    }

    /// The persisted raw key list.
    pub fn ayah_keys(&self) -> Vec<AyahKey> {
        slots::load_or_default(self.store.as_ref(), BOOKMARKED_AYAHS_KEY)
    }

    /// Subscribe to republished ayah bookmark state.
    pub fn on_ayahs_change(
        &self,
        listener: impl Fn(&Vec<AyahKey>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.ayahs_changed.subscribe(listener)
    }
}
