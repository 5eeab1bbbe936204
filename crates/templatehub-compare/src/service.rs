//! Version comparison service.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use templatehub_core::traits::BlobStore;
use templatehub_core::AppError;
use templatehub_entity::TemplateVersion;
use templatehub_extract::{classify, extract_text, ExtractionError};

use crate::diff::{diff_scalar, diff_text};
use crate::error::CompareError;
use crate::result::{
    ComparisonResult, ComparisonSummary, ContentDiff, FieldChange, FileSnapshot, VersionSnapshot,
};
use crate::traits::TemplateStore;

/// Compares two versions of a template.
///
/// Holds no state beyond its injected collaborators; every call is an
/// independent read-only computation, so any number of comparisons may run
/// concurrently.
#[derive(Clone)]
pub struct CompareService {
    /// Version store.
    templates: Arc<dyn TemplateStore>,
    /// Blob store, consulted only when checksums differ.
    blobs: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for CompareService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompareService").finish()
    }
}

impl CompareService {
    /// Creates a new comparison service.
    pub fn new(templates: Arc<dyn TemplateStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { templates, blobs }
    }

    /// Compare two versions of the template `template_id`.
    ///
    /// Precondition violations (missing ids, self-comparison, unknown
    /// records, cross-template ids) fail the whole request. Content-level
    /// problems do not: a binary or unparseable file degrades
    /// [`ContentDiff`] while the metadata diffs are still returned.
    pub async fn compare_versions(
        &self,
        template_id: Uuid,
        version_a_id: Option<Uuid>,
        version_b_id: Option<Uuid>,
    ) -> Result<ComparisonResult, CompareError> {
        let (Some(a_id), Some(b_id)) = (version_a_id, version_b_id) else {
            return Err(CompareError::MissingParameter);
        };
        if a_id == b_id {
            return Err(CompareError::SameVersion);
        }

        let template = self
            .templates
            .get_template(template_id)
            .await?
            .ok_or(CompareError::TemplateNotFound)?;

        // Independent reads, fetched concurrently.
        let (version_a, version_b) = tokio::try_join!(
            self.templates.get_version(a_id),
            self.templates.get_version(b_id),
        )?;
        let version_a = version_a.ok_or(CompareError::VersionNotFound(1))?;
        let version_b = version_b.ok_or(CompareError::VersionNotFound(2))?;

        if version_a.template_id != template.id || version_b.template_id != template.id {
            return Err(CompareError::CrossParentComparison);
        }

        let mut metadata_diff = BTreeMap::new();
        insert_change(
            &mut metadata_diff,
            "versionNumber",
            diff_scalar(&version_a.version_number, &version_b.version_number),
        );
        insert_change(
            &mut metadata_diff,
            "changes",
            diff_scalar(&version_a.changes, &version_b.changes),
        );
        insert_change(
            &mut metadata_diff,
            "author",
            diff_scalar(&version_a.metadata.author, &version_b.metadata.author),
        );
        insert_change(
            &mut metadata_diff,
            "status",
            diff_scalar(&version_a.metadata.status, &version_b.metadata.status),
        );

        let mut file_metadata_diff = BTreeMap::new();
        insert_change(
            &mut file_metadata_diff,
            "originalName",
            diff_scalar(&version_a.file.original_name, &version_b.file.original_name),
        );
        insert_change(
            &mut file_metadata_diff,
            "mimeType",
            diff_scalar(&version_a.file.mime_type, &version_b.file.mime_type),
        );
        insert_change(
            &mut file_metadata_diff,
            "sizeBytes",
            diff_scalar(&version_a.file.size_bytes, &version_b.file.size_bytes),
        );

        let content_diff = self.diff_content(&version_a, &version_b).await?;

        let metadata_change_count = metadata_diff.len();
        let file_metadata_change_count = file_metadata_diff.len();
        let total_change_count = metadata_change_count
            + file_metadata_change_count
            + usize::from(content_diff.content_changed);
        let summary = ComparisonSummary {
            has_any_change: total_change_count > 0,
            metadata_change_count,
            file_metadata_change_count,
            content_changed: content_diff.content_changed,
            total_change_count,
        };

        info!(
            template_id = %template.id,
            version_a = %version_a.id,
            version_b = %version_b.id,
            changes = summary.total_change_count,
            content_changed = summary.content_changed,
            "Versions compared"
        );

        Ok(ComparisonResult {
            template_id: template.id,
            template_name: template.name,
            version_a: snapshot(&version_a),
            version_b: snapshot(&version_b),
            metadata_diff,
            file_metadata_diff,
            content_diff,
            summary,
        })
    }

    /// Content portion of the comparison.
    ///
    /// Equal checksums guarantee byte-identical content, so the blob store
    /// is not consulted at all in that case.
    async fn diff_content(
        &self,
        a: &TemplateVersion,
        b: &TemplateVersion,
    ) -> Result<ContentDiff, CompareError> {
        let kind_a = classify(&a.file.mime_type, &a.file.original_name);
        let kind_b = classify(&b.file.mime_type, &b.file.original_name);
        let source_kind = kind_b.or(kind_a);
        let is_text_representable = kind_a.is_some() && kind_b.is_some();

        if a.file.checksum == b.file.checksum {
            return Ok(ContentDiff {
                content_changed: false,
                is_text_representable,
                source_kind,
                segments: None,
                error: None,
            });
        }

        if !is_text_representable {
            // Binary on at least one side: the content differs by checksum
            // alone and cannot be diffed as text.
            return Ok(ContentDiff {
                content_changed: true,
                is_text_representable: false,
                source_kind,
                segments: None,
                error: None,
            });
        }

        let (bytes_a, bytes_b) = tokio::try_join!(
            self.blobs.get_bytes(&a.file.storage_key),
            self.blobs.get_bytes(&b.file.storage_key),
        )?;
        let bytes_a = bytes_a.ok_or_else(|| missing_blob(&a.file.storage_key))?;
        let bytes_b = bytes_b.ok_or_else(|| missing_blob(&b.file.storage_key))?;

        let extracted_a = extract_text(&bytes_a, &a.file.mime_type, &a.file.original_name);
        let extracted_b = extract_text(&bytes_b, &b.file.mime_type, &b.file.original_name);

        match (extracted_a, extracted_b) {
            (Ok(text_a), Ok(text_b)) => Ok(ContentDiff {
                content_changed: true,
                is_text_representable: true,
                source_kind,
                segments: Some(diff_text(&text_a, &text_b)),
                error: None,
            }),
            (Err(ExtractionError::UnsupportedFormat { .. }), _)
            | (_, Err(ExtractionError::UnsupportedFormat { .. })) => Ok(ContentDiff {
                content_changed: true,
                is_text_representable: false,
                source_kind,
                segments: None,
                error: None,
            }),
            (Err(e), _) | (_, Err(e)) => Ok(ContentDiff {
                content_changed: true,
                is_text_representable: true,
                source_kind,
                segments: None,
                error: Some(e.to_string()),
            }),
        }
    }
}

fn insert_change(
    map: &mut BTreeMap<String, FieldChange>,
    field: &str,
    change: Option<FieldChange>,
) {
    if let Some(change) = change {
        map.insert(field.to_string(), change);
    }
}

fn snapshot(version: &TemplateVersion) -> VersionSnapshot {
    VersionSnapshot {
        id: version.id,
        version_number: version.version_number,
        changes: version.changes.clone(),
        author: version.metadata.author.clone(),
        status: version.metadata.status,
        created_at: version.metadata.created_at,
        file: FileSnapshot {
            original_name: version.file.original_name.clone(),
            mime_type: version.file.mime_type.clone(),
            size_bytes: version.file.size_bytes,
            checksum: version.file.checksum.clone(),
        },
    }
}

fn missing_blob(storage_key: &str) -> CompareError {
    CompareError::StorageUnavailable(AppError::storage(format!(
        "blob missing for storage key '{storage_key}'"
    )))
}
