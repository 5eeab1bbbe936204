//! # templatehub-entity
//!
//! Domain entity models for TemplateHub. These are read models from the
//! comparison core's point of view: templates and their versions are
//! created, listed, and restored by the surrounding CRUD layer, which owns
//! the write path.

pub mod template;
pub mod version;

pub use template::{Template, TemplateMetadata, TemplateStatus};
pub use version::{TemplateVersion, VersionFile, VersionMetadata};
