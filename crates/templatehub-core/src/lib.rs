//! # templatehub-core
//!
//! Core crate for TemplateHub. Contains the unified error system,
//! configuration schemas, and the storage collaborator trait.
//!
//! This crate has **no** internal dependencies on other TemplateHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
