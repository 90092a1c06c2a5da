//! Bookmark key types
//!
//! Hadith bookmarks are plain content-id strings and need no dedicated type.
//! Ayah bookmarks are composite surah/ayah keys compared structurally.

use serde::{Deserialize, Serialize};

/// Composite key identifying one ayah within one surah.
///
/// Equality is structural: both ids equal means the same bookmark, matching
/// the `{surah_id, ayah_id}` objects in the `bookmarkedAyahs` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AyahKey {
    pub surah_id: u32,
    pub ayah_id: u32,
}

impl AyahKey {
    pub fn new(surah_id: u32, ayah_id: u32) -> Self {
        Self { surah_id, ayah_id }
    }
}
