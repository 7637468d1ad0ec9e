//! Shared application service layer for phasetab.
//!
//! This crate provides a unified interface for frontends, centralizing
//! catalog loading and the classification request surface.

pub mod catalog_service;
pub mod classify_service;
pub mod error;

// Re-export key types for convenience
pub use catalog_service::{list_tables, load_catalog};
pub use classify_service::{Classification, ClassifyRequest, classify_state};
pub use error::{AppError, AppResult};
