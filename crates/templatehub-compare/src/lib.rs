//! # templatehub-compare
//!
//! The version comparison core: given two stored versions of a template,
//! compute which metadata fields changed, which file attributes changed, and
//! whether (and how) the extracted textual content changed.
//!
//! The comparator is stateless and side-effect-free; it reads version
//! records through [`TemplateStore`] and file content through
//! [`templatehub_core::traits::BlobStore`], both injected at construction.

pub mod diff;
pub mod error;
pub mod result;
pub mod service;
pub mod traits;

pub use diff::{diff_scalar, diff_text};
pub use error::CompareError;
pub use result::{ComparisonResult, ComparisonSummary, ContentDiff, DiffSegment, SegmentKind};
pub use service::CompareService;
pub use traits::TemplateStore;
