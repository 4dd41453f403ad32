//! Reelvault API Library
//!
//! This crate provides the HTTP handlers, auth middleware, the two
//! ingestion pipelines, and application setup.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod ingest;
pub mod setup;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
