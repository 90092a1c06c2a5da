//! Tasbih counter registry

pub mod service;

pub use service::TasbihService;
