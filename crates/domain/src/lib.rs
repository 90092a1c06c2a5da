//! # Taqwa Domain
//!
//! Business domain types and models for the Taqwa Tracker local-state engine.
//!
//! This crate contains:
//! - Persisted data types (StreakStats, Tasbih, AyahKey, etc.)
//! - Domain error types and Result definitions
//! - Storage slot keys and domain constants
//!
//! ## Architecture
//! - No dependencies on other Taqwa crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures
//!
//! All persisted shapes are serde-compatible with the storage slots written
//! by earlier releases; field names must not change.

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::{Result, TaqwaError};
pub use types::bookmarks::AyahKey;
pub use types::preferences::ReadingPosition;
pub use types::streak::{ReadActivity, ReadItem, ReadItemKind, StreakStats};
pub use types::tasbih::Tasbih;
