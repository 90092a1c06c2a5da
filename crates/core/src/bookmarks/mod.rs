//! Bookmark ledger

pub mod service;

pub use service::BookmarkService;
