//! # Taqwa Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The SQLite-backed durable store (`SqliteStateStore`)
//! - Connection pooling and schema migrations (`DbManager`)
//! - Application context wiring (`AppContext`)
//!
//! ## Architecture
//! - Implements traits defined in `taqwa-core`
//! - Depends on `taqwa-domain` and `taqwa-core`
//! - Contains all "impure" code (filesystem, SQLite)

pub mod context;
pub mod database;
pub mod errors;

// Re-export commonly used items
pub use context::AppContext;
pub use database::manager::DbManager;
pub use database::state_repository::SqliteStateStore;
pub use errors::InfraError;
