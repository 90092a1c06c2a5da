//! Reading-streak engine

pub mod service;

pub use service::ReadStreakService;
