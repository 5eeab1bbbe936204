//! Plain-text passthrough extraction.

use crate::error::ExtractionError;

const TEXT_EXTENSIONS: &[&str] = &[".txt", ".md", ".csv", ".log"];

pub(crate) fn matches(mime_type: &str, file_name: &str) -> bool {
    if mime_type.starts_with("text/") {
        return true;
    }
    let lower = file_name.to_ascii_lowercase();
    TEXT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

pub(crate) fn extract(
    bytes: &[u8],
    _mime_type: &str,
    _file_name: &str,
) -> Result<String, ExtractionError> {
    // Lossy decode: invalid sequences become replacement characters rather
    // than failing the whole comparison.
    Ok(String::from_utf8_lossy(bytes).into_owned())
}
