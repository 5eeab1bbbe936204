//! PDF text extraction via `lopdf`.

use lopdf::Document;

use crate::error::ExtractionError;

pub(crate) fn matches(mime_type: &str, file_name: &str) -> bool {
    mime_type == "application/pdf" || file_name.to_ascii_lowercase().ends_with(".pdf")
}

/// Extract the text of every page, joined with newline separators.
pub(crate) fn extract(
    bytes: &[u8],
    _mime_type: &str,
    _file_name: &str,
) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::MalformedContainer {
        container: "PDF",
        detail: e.to_string(),
    })?;

    if doc.is_encrypted() {
        return Err(ExtractionError::EnvironmentUnsupported(
            "PDF is encrypted; text extraction of protected documents is not supported"
                .to_string(),
        ));
    }

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let mut pages = Vec::with_capacity(page_numbers.len());
    for number in page_numbers {
        let text =
            doc.extract_text(&[number])
                .map_err(|e| ExtractionError::MalformedContainer {
                    container: "PDF",
                    detail: format!("failed to extract text of page {number}: {e}"),
                })?;
        pages.push(text.trim_end().to_string());
    }

    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    use super::*;

    fn build_pdf(line: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn extracts_page_text() {
        let bytes = build_pdf("Employment contract draft");
        let text = extract(&bytes, "application/pdf", "contract.pdf").unwrap();
        assert!(text.contains("Employment contract draft"), "got: {text:?}");
    }

    #[test]
    fn garbage_bytes_are_a_malformed_container() {
        let err = extract(b"%PDF-not-really", "application/pdf", "contract.pdf").unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::MalformedContainer { container: "PDF", .. }
        ));
    }

    #[test]
    fn matches_by_extension_without_mime() {
        assert!(matches("application/octet-stream", "scan.PDF"));
        assert!(!matches("application/octet-stream", "scan.docx"));
    }
}
