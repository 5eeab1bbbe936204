//! Text-node collection over parsed XML.
//!
//! The three Office extractors differ only in *which* XML parts they feed
//! in here; the walk itself is format-agnostic.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ExtractionError;

/// Collect every text node of `xml` in document order, joined with single
/// spaces and with runs of whitespace collapsed.
///
/// Collapsing may erase meaningful alignment whitespace (e.g. multi-space
/// table layout); that matches the behavior the comparison UI was built
/// against.
pub(crate) fn collect_document_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut parts: Vec<String> = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(xml_error)?;
                if !text.trim().is_empty() {
                    parts.push(text.trim().to_string());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(xml_error(e)),
        }
    }

    Ok(normalize_whitespace(&parts.join(" ")))
}

/// Collect text nodes whose direct parent element has one of the `wanted`
/// local names, in document order.
///
/// Used for spreadsheet parts where only specific elements carry cell
/// content (`<v>` values, `<t>` shared/inline strings) and the rest is
/// structural markup.
pub(crate) fn collect_element_text(
    xml: &str,
    wanted: &[&str],
) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<String> = Vec::new();
    let mut out: Vec<String> = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Text(t)) => {
                let in_wanted = stack
                    .last()
                    .is_some_and(|name| wanted.contains(&name.as_str()));
                if in_wanted {
                    let text = t.unescape().map_err(xml_error)?;
                    if !text.trim().is_empty() {
                        out.push(text.trim().to_string());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(xml_error(e)),
        }
    }

    Ok(out)
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn xml_error(e: quick_xml::Error) -> ExtractionError {
    ExtractionError::MalformedContainer {
        container: "OOXML",
        detail: format!("invalid XML: {e}"),
    }
}
