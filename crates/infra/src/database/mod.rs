//! Database implementations

pub mod manager;
pub mod state_repository;

pub use manager::DbManager;
pub use state_repository::SqliteStateStore;
