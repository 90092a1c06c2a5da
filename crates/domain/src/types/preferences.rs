//! Preference value types

use serde::{Deserialize, Serialize};

/// Saved page/zoom position for one library document.
///
/// Stored under the document's own storage key; consumed by the document
/// reader, which treats a missing record as page 1 at zoom 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingPosition {
    pub page: u32,
    pub zoom: f32,
}

impl Default for ReadingPosition {
    fn default() -> Self {
        Self { page: 1, zoom: 1.0 }
    }
}
