//! Domain types and models
//!
//! Persisted shapes mirror the legacy storage slots field-for-field; serde
//! renames keep the JSON stable while the Rust side stays snake_case.

pub mod bookmarks;
pub mod preferences;
pub mod streak;
pub mod tasbih;

pub use bookmarks::AyahKey;
pub use preferences::ReadingPosition;
pub use streak::{ReadActivity, ReadItem, ReadItemKind, StreakStats};
pub use tasbih::Tasbih;
