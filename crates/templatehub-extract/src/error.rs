//! Extraction error types.

use thiserror::Error;

/// Errors produced while turning a stored file into plain text.
///
/// Callers are expected to distinguish [`UnsupportedFormat`] (the file is
/// simply not text-representable) from the other variants, which mean the
/// file *should* have been extractable but was not.
///
/// [`UnsupportedFormat`]: ExtractionError::UnsupportedFormat
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// No extractor is registered for the file's media type.
    #[error("Unsupported file format for text extraction: {mime_type}")]
    UnsupportedFormat {
        /// The declared media type that failed to match any extractor.
        mime_type: String,
    },

    /// The file claimed a supported format but its container is broken:
    /// an unreadable ZIP or PDF structure, invalid XML, or a missing
    /// required inner part.
    #[error("Malformed {container} container: {detail}")]
    MalformedContainer {
        /// Container family ("OOXML" or "PDF").
        container: &'static str,
        /// What exactly was wrong.
        detail: String,
    },

    /// The document requires capabilities this deployment does not have,
    /// e.g. an encrypted PDF. Surfaced to callers distinctly from parse
    /// failures so the UI can explain rather than report corruption.
    #[error("{0}")]
    EnvironmentUnsupported(String),
}
