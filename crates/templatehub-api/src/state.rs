//! Application state shared across all handlers.

use std::sync::Arc;

use templatehub_compare::CompareService;
use templatehub_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Version comparison service
    pub compare: Arc<CompareService>,
}
