//! Office Open XML text extraction (.docx, .xlsx, .pptx).
//!
//! All three formats are ZIP containers holding XML parts; they differ only
//! in which parts carry the document text.

use std::io::{Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::ExtractionError;
use crate::xml;

type Archive<'a> = ZipArchive<Cursor<&'a [u8]>>;

pub(crate) fn matches(mime_type: &str, file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    mime_type.contains("wordprocessingml")
        || mime_type.contains("spreadsheetml")
        || mime_type.contains("presentationml")
        || lower.ends_with(".docx")
        || lower.ends_with(".xlsx")
        || lower.ends_with(".pptx")
}

/// Dispatch to the sub-format extractor.
pub(crate) fn extract(
    bytes: &[u8],
    mime_type: &str,
    file_name: &str,
) -> Result<String, ExtractionError> {
    let lower = file_name.to_ascii_lowercase();
    let mut archive = open_archive(bytes)?;

    if mime_type.contains("wordprocessingml") || lower.ends_with(".docx") {
        extract_docx(&mut archive)
    } else if mime_type.contains("spreadsheetml") || lower.ends_with(".xlsx") {
        extract_xlsx(&mut archive)
    } else {
        extract_pptx(&mut archive)
    }
}

fn open_archive(bytes: &[u8]) -> Result<Archive<'_>, ExtractionError> {
    ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError::MalformedContainer {
        container: "OOXML",
        detail: format!("not a readable ZIP archive: {e}"),
    })
}

/// Read an inner part as a string. `Ok(None)` means the part is absent.
fn read_part(archive: &mut Archive<'_>, name: &str) -> Result<Option<String>, ExtractionError> {
    match archive.by_name(name) {
        Ok(mut part) => {
            let mut content = String::new();
            part.read_to_string(&mut content)
                .map_err(|e| ExtractionError::MalformedContainer {
                    container: "OOXML",
                    detail: format!("failed to read {name}: {e}"),
                })?;
            Ok(Some(content))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(ExtractionError::MalformedContainer {
            container: "OOXML",
            detail: format!("failed to open {name}: {e}"),
        }),
    }
}

/// Word: all text nodes of the single document part.
fn extract_docx(archive: &mut Archive<'_>) -> Result<String, ExtractionError> {
    let document =
        read_part(archive, "word/document.xml")?.ok_or(ExtractionError::MalformedContainer {
            container: "OOXML",
            detail: "missing word/document.xml".to_string(),
        })?;
    xml::collect_document_text(&document)
}

/// Excel: shared-string table entries first, then a scan of every worksheet's
/// cell values. Either may hold the only string content depending on how the
/// workbook was produced, so both are collected.
fn extract_xlsx(archive: &mut Archive<'_>) -> Result<String, ExtractionError> {
    let mut lines: Vec<String> = match read_part(archive, "xl/sharedStrings.xml")? {
        Some(shared) => xml::collect_element_text(&shared, &["t"])?,
        // No shared-string table: all strings are inline in the sheets.
        None => Vec::new(),
    };

    let mut sheet_names: Vec<String> = archive
        .file_names()
        .filter(|name| name.starts_with("xl/worksheets/sheet") && name.ends_with(".xml"))
        .map(String::from)
        .collect();
    sheet_names.sort();

    for name in sheet_names {
        let Some(sheet) = read_part(archive, &name)? else {
            continue;
        };
        let cells = xml::collect_element_text(&sheet, &["v", "t"])?;
        if !cells.is_empty() {
            lines.push(cells.join(" | "));
        }
    }

    Ok(lines.join("\n"))
}

/// PowerPoint: every slide part in slide order, each prefixed with a
/// `[Slide N]` marker.
fn extract_pptx(archive: &mut Archive<'_>) -> Result<String, ExtractionError> {
    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .map(|name| (slide_number(name), name.to_string()))
        .collect();
    slides.sort();

    let mut parts: Vec<String> = Vec::new();
    for (number, name) in slides {
        let Some(slide) = read_part(archive, &name)? else {
            continue;
        };
        let text = xml::collect_document_text(&slide)?;
        if !text.is_empty() {
            parts.push(format!("[Slide {number}]\n{text}"));
        }
    }

    Ok(parts.join("\n\n"))
}

fn slide_number(name: &str) -> u32 {
    name.trim_start_matches("ppt/slides/slide")
        .trim_end_matches(".xml")
        .parse()
        .unwrap_or(u32::MAX)
}
