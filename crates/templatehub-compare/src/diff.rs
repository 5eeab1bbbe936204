//! Text and scalar diffing.
//!
//! Line-oriented Myers diff via the `similar` crate, reshaped into the
//! merged equal/insert/delete segments the comparison result carries.

use std::time::{Duration, Instant};

use serde::Serialize;
use similar::{Algorithm, ChangeTag, TextDiffConfig};

use crate::result::{DiffSegment, FieldChange, SegmentKind};

/// Upper bound on diff computation. Pathological inputs degrade to coarse
/// replace runs instead of blocking the request.
const DIFF_DEADLINE: Duration = Duration::from_secs(2);

/// Compute the line-level difference between two texts.
///
/// Changes are emitted in merged-walk order (deletions before insertions at
/// the same alignment point) and adjacent changes of the same kind are
/// merged into a single segment. Line terminators stay attached to their
/// lines, so reconstructing either side from the segments is byte-exact.
///
/// Both inputs empty yields an empty vector; identical non-empty inputs
/// yield a single `equal` segment.
pub fn diff_text(a: &str, b: &str) -> Vec<DiffSegment> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }

    let diff = TextDiffConfig::default()
        .algorithm(Algorithm::Myers)
        .deadline(Instant::now() + DIFF_DEADLINE)
        .diff_lines(a, b);

    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Equal,
            ChangeTag::Delete => SegmentKind::Delete,
            ChangeTag::Insert => SegmentKind::Insert,
        };
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment {
                text: change.value().to_string(),
                kind,
            }),
        }
    }
    segments
}

/// Compare two scalar values: `None` when equal, the old/new pair otherwise.
pub fn diff_scalar<T: Serialize + PartialEq>(old: &T, new: &T) -> Option<FieldChange> {
    if old == new {
        return None;
    }
    Some(FieldChange {
        old: serde_json::to_value(old).ok()?,
        new: serde_json::to_value(new).ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(segments: &[DiffSegment], keep: SegmentKind) -> String {
        segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Equal || s.kind == keep)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn identical_inputs_yield_one_equal_segment() {
        let text = "alpha\nbeta\ngamma\n";
        let segments = diff_text(text, text);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Equal);
        assert_eq!(segments[0].text, text);
    }

    #[test]
    fn empty_inputs_yield_no_segments() {
        assert!(diff_text("", "").is_empty());
    }

    #[test]
    fn disjoint_inputs_yield_delete_then_insert() {
        let segments = diff_text("one\ntwo\n", "three\nfour\n");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].kind, SegmentKind::Delete);
        assert_eq!(segments[0].text, "one\ntwo\n");
        assert_eq!(segments[1].kind, SegmentKind::Insert);
        assert_eq!(segments[1].text, "three\nfour\n");
    }

    #[test]
    fn single_line_replacement_keeps_surrounding_context() {
        let segments = diff_text("a\nb\nc\n", "a\nx\nc\n");
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], seg("a\n", SegmentKind::Equal));
        assert_eq!(segments[1], seg("b\n", SegmentKind::Delete));
        assert_eq!(segments[2], seg("x\n", SegmentKind::Insert));
        assert_eq!(segments[3], seg("c\n", SegmentKind::Equal));
    }

    #[test]
    fn round_trip_reconstructs_both_sides() {
        let cases = [
            ("a\nb\nc\n", "a\nx\nc\n"),
            ("no trailing newline", "still no trailing newline"),
            ("", "added\nlines\n"),
            ("removed\nlines\n", ""),
            ("shared\nhead\nold tail\n", "shared\nhead\nnew tail\nextra\n"),
        ];
        for (a, b) in cases {
            let segments = diff_text(a, b);
            assert_eq!(reconstruct(&segments, SegmentKind::Delete), a, "a: {a:?}");
            assert_eq!(reconstruct(&segments, SegmentKind::Insert), b, "b: {b:?}");
        }
    }

    #[test]
    fn adjacent_changes_of_one_kind_are_merged() {
        let segments = diff_text("keep\n", "keep\nnew one\nnew two\nnew three\n");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].kind, SegmentKind::Insert);
        assert_eq!(segments[1].text, "new one\nnew two\nnew three\n");
    }

    #[test]
    fn scalar_diff_is_none_for_equal_values() {
        assert!(diff_scalar(&"same", &"same").is_none());
        assert!(diff_scalar(&7, &7).is_none());
    }

    #[test]
    fn scalar_diff_carries_old_and_new() {
        let change = diff_scalar(&1, &2).unwrap();
        assert_eq!(change.old, serde_json::json!(1));
        assert_eq!(change.new, serde_json::json!(2));
    }

    fn seg(text: &str, kind: SegmentKind) -> DiffSegment {
        DiffSegment {
            text: text.to_string(),
            kind,
        }
    }
}
