//! # Taqwa Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The reading-streak engine, bookmark ledger, counter registry, and
//!   preference cache services
//! - Port/adapter interfaces (traits) for storage and time
//! - The change-notification primitive used to republish state to views
//!
//! ## Architecture Principles
//! - Only depends on `taqwa-domain`
//! - No database or platform code; the durable store arrives via the
//!   [`StateStore`] port
//! - Services are constructed with their dependencies injected, never via
//!   ambient globals
//! - Store failures degrade to safe defaults and are logged, never surfaced
//!   to callers

pub mod bookmarks;
pub mod events;
pub mod preferences;
pub mod streak;
pub mod tasbih;

// Infrastructure ports
pub mod storage_ports;
pub mod time_ports;

mod slots;

// Re-export specific items to avoid ambiguity
pub use bookmarks::BookmarkService;
pub use events::{ChangeNotifier, SubscriptionId};
pub use preferences::PreferencesService;
pub use storage_ports::StateStore;
pub use streak::ReadStreakService;
pub use tasbih::TasbihService;
pub use time_ports::{Clock, SystemClock};
