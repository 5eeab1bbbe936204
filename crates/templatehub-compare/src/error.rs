//! Comparison error types.

use thiserror::Error;

use templatehub_core::error::AppError;

/// Errors that fail a comparison request outright.
///
/// Extraction problems are deliberately *not* here: a file that cannot be
/// diffed as text degrades the content portion of the result instead of
/// failing the request (see [`crate::result::ContentDiff`]).
#[derive(Debug, Error)]
pub enum CompareError {
    /// One or both version ids were not supplied.
    #[error("Both version ids are required")]
    MissingParameter,

    /// The same version id was supplied twice.
    #[error("Cannot compare a version with itself")]
    SameVersion,

    /// The parent template does not exist.
    #[error("Template not found")]
    TemplateNotFound,

    /// One of the requested versions does not exist. The index (1 or 2)
    /// names which positional argument was at fault.
    #[error("Version {0} not found")]
    VersionNotFound(u8),

    /// The versions do not both belong to the requested template.
    #[error("Versions must belong to the same template")]
    CrossParentComparison,

    /// The version store or blob store failed. Retrying is the caller's
    /// decision; the comparator never retries internally.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] AppError),
}

impl From<CompareError> for AppError {
    fn from(err: CompareError) -> Self {
        match err {
            CompareError::MissingParameter
            | CompareError::SameVersion
            | CompareError::CrossParentComparison => AppError::validation(err.to_string()),
            CompareError::TemplateNotFound | CompareError::VersionNotFound(_) => {
                AppError::not_found(err.to_string())
            }
            CompareError::StorageUnavailable(source) => {
                AppError::service_unavailable(source.to_string())
            }
        }
    }
}
