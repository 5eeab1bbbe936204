//! Comparison result model.
//!
//! Computed fresh per request and serialized straight to the caller; nothing
//! here is ever persisted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use templatehub_entity::TemplateStatus;
use templatehub_extract::SourceKind;

/// The structured difference between two versions of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// The parent template.
    pub template_id: Uuid,
    /// Its display name.
    pub template_name: String,
    /// Snapshot of the first version.
    pub version_a: VersionSnapshot,
    /// Snapshot of the second version.
    pub version_b: VersionSnapshot,
    /// Changed metadata fields (`versionNumber`, `changes`, `author`,
    /// `status`), keyed by field name; equal fields are omitted.
    pub metadata_diff: BTreeMap<String, FieldChange>,
    /// Changed file attributes (`originalName`, `mimeType`, `sizeBytes`).
    pub file_metadata_diff: BTreeMap<String, FieldChange>,
    /// Content-level difference, when computable.
    pub content_diff: ContentDiff,
    /// Aggregate counts.
    pub summary: ComparisonSummary,
}

/// Denormalized view of one version as it entered the comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    /// Version record id.
    pub id: Uuid,
    /// Sequential version number.
    pub version_number: i32,
    /// Change description.
    pub changes: String,
    /// Author of the version.
    pub author: String,
    /// Lifecycle status at snapshot time.
    pub status: TemplateStatus,
    /// When the version was created.
    pub created_at: DateTime<Utc>,
    /// File attributes.
    pub file: FileSnapshot,
}

/// File attributes of a compared version (storage key deliberately omitted;
/// it is an internal detail of the blob store).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSnapshot {
    /// Uploaded file name.
    pub original_name: String,
    /// Declared media type.
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Content hash.
    pub checksum: String,
}

/// An old/new pair for one scalar field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    /// The field's value in version A.
    pub old: serde_json::Value,
    /// The field's value in version B.
    pub new: serde_json::Value,
}

/// How (and whether) the file content changed between two versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDiff {
    /// Whether the checksums differ.
    pub content_changed: bool,
    /// Whether both files dispatch to a text extractor. Binary files still
    /// compare by checksum, they just cannot be diffed as text.
    pub is_text_representable: bool,
    /// Which extractor family handled the files, when any did.
    pub source_kind: Option<SourceKind>,
    /// Line-level segments, present only when both texts were extracted.
    pub segments: Option<Vec<DiffSegment>>,
    /// Informational message when extraction failed without failing the
    /// request (malformed container, unsupported environment).
    pub error: Option<String>,
}

/// A contiguous run of equal, inserted, or deleted text.
///
/// Concatenating the `text` of all `equal` + `insert` segments reconstructs
/// version B's extracted text exactly; `equal` + `delete` reconstructs
/// version A's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    /// The run's text, newlines included.
    pub text: String,
    /// Whether the run is common, B-only, or A-only.
    pub kind: SegmentKind,
}

/// Classification of a diff segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Present in both versions.
    Equal,
    /// Present only in version B.
    Insert,
    /// Present only in version A.
    Delete,
}

/// Aggregate change counts for quick rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    /// Whether anything at all differs.
    pub has_any_change: bool,
    /// Number of changed metadata fields.
    pub metadata_change_count: usize,
    /// Number of changed file attributes.
    pub file_metadata_change_count: usize,
    /// Whether the file content differs by checksum.
    pub content_changed: bool,
    /// Metadata + file-attribute changes, plus one when content changed.
    pub total_change_count: usize,
}
