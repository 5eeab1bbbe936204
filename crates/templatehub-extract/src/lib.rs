//! # templatehub-extract
//!
//! Converts a stored file (raw bytes + declared media type) into plain text
//! for comparison purposes.
//!
//! Dispatch is an ordered table of `(kind, predicate, extractor)` entries;
//! first match wins, so adding a format is additive:
//!
//! | Kind   | Matches                                             | Strategy |
//! |--------|-----------------------------------------------------|----------|
//! | text   | `text/*` mime or plain-text extension               | UTF-8 passthrough |
//! | pdf    | `application/pdf` or `.pdf`                         | per-page lopdf extraction |
//! | office | OOXML mimes or `.docx`/`.xlsx`/`.pptx`              | unzip + XML text-node walk |
//!
//! Extraction is a pure function of its inputs: no I/O, no shared state,
//! safe to call from any number of tasks concurrently.

pub mod error;

mod office;
mod pdf;
mod text;
mod xml;

use serde::{Deserialize, Serialize};

pub use error::ExtractionError;

/// Returned instead of an empty string when a supported document contains no
/// text, so downstream diffing always has a stable sentinel to work with.
pub const NO_TEXT_SENTINEL: &str = "No text content found";

/// The family of extractor a file dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Plain text, byte-for-byte.
    Text,
    /// Office Open XML container (.docx, .xlsx, .pptx).
    Office,
    /// PDF document.
    Pdf,
}

struct FormatHandler {
    kind: SourceKind,
    matches: fn(&str, &str) -> bool,
    extract: fn(&[u8], &str, &str) -> Result<String, ExtractionError>,
}

/// Evaluated in order; first match wins.
const HANDLERS: &[FormatHandler] = &[
    FormatHandler {
        kind: SourceKind::Text,
        matches: text::matches,
        extract: text::extract,
    },
    FormatHandler {
        kind: SourceKind::Pdf,
        matches: pdf::matches,
        extract: pdf::extract,
    },
    FormatHandler {
        kind: SourceKind::Office,
        matches: office::matches,
        extract: office::extract,
    },
];

/// Determine which extractor family would handle the file, if any.
///
/// Shared with the version comparator so that its `sourceKind` labeling and
/// the actual extraction can never disagree.
pub fn classify(mime_type: &str, file_name: &str) -> Option<SourceKind> {
    HANDLERS
        .iter()
        .find(|h| (h.matches)(mime_type, file_name))
        .map(|h| h.kind)
}

/// Extract the plain-text content of a file.
///
/// Files with no registered extractor fail with
/// [`ExtractionError::UnsupportedFormat`]; supported files whose body is
/// empty yield [`NO_TEXT_SENTINEL`].
pub fn extract_text(
    bytes: &[u8],
    mime_type: &str,
    file_name: &str,
) -> Result<String, ExtractionError> {
    for handler in HANDLERS {
        if (handler.matches)(mime_type, file_name) {
            let extracted = (handler.extract)(bytes, mime_type, file_name)?;
            if extracted.trim().is_empty() {
                return Ok(NO_TEXT_SENTINEL.to_string());
            }
            return Ok(extracted);
        }
    }
    Err(ExtractionError::UnsupportedFormat {
        mime_type: mime_type.to_string(),
    })
}
