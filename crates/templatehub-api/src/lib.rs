//! # templatehub-api
//!
//! HTTP API layer for TemplateHub built on Axum.
//!
//! Exposes the version comparison endpoint plus a health check, with error
//! mapping from the domain `AppError` to HTTP status codes.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
