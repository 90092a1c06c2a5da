//! Reading-streak types
//!
//! The streak record is persisted as a single JSON object under the
//! `taqwa_tracker_reading_streak` slot. Field names are camelCase in storage
//! (legacy shape) and must not change.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Kind of content a read event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadItemKind {
    Quran,
    Hadith,
}

/// A single item the user read, kept so the dashboard can link back to it.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadItem {
    /// Content kind, serialized as `"quran"` or `"hadith"`.
    #[serde(rename = "type")]
    pub kind: ReadItemKind,

    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subtitle: Option<String>,

    /// Navigable resource locator (in-app route or URL).
    pub link: String,

    /// Instant the item was read, ISO-8601 in storage.
    pub timestamp: DateTime<Utc>,
}

/// Reading activity for one calendar day.
///
/// A history never contains two entries with the same `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadActivity {
    /// Calendar day, `YYYY-MM-DD` in storage.
    pub date: NaiveDate,

    /// Number of items read on this day.
    pub items_read: u32,

    /// Most-recent-last items read on this day. Absent in records written by
    /// older releases, hence the default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_items: Vec<ReadItem>,
}

impl ReadActivity {
    /// Empty activity for the given day.
    pub fn new(date: NaiveDate) -> Self {
        Self { date, items_read: 0, recent_items: Vec::new() }
    }
}

/// Aggregate streak statistics.
///
/// # Invariants
/// - `current_streak <= longest_streak` after any mutation completes
/// - `current_streak == 0` whenever `last_read_date` is `None`
/// - `reading_history` holds at most 90 entries, oldest evicted first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStats {
    /// Consecutive days with at least one read, ending at `last_read_date`.
    pub current_streak: u32,

    /// Historical maximum of `current_streak`.
    pub longest_streak: u32,

    /// Lifetime count of distinct days with at least one read.
    pub total_days_read: u32,

    /// Lifetime sum of items read.
    pub total_items_read: u32,

    /// Calendar day of the most recent read, `None` before the first read.
    pub last_read_date: Option<NaiveDate>,

    /// Per-day activity, oldest first.
    #[serde(default)]
    pub reading_history: Vec<ReadActivity>,
}
