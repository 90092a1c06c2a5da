//! Preference cache

pub mod service;

pub use service::PreferencesService;
