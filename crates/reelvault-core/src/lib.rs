//! Reelvault Core Library
//!
//! This crate provides the domain model, error types, and configuration
//! shared across all reelvault components.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{Record, RecordResponse};
