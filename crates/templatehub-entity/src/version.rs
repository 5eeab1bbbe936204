//! Template version entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::template::TemplateStatus;

/// An immutable snapshot of a template at a point in time.
///
/// Version numbers are positive and strictly increasing within a template;
/// they are assigned by the external version store when a snapshot is taken,
/// never by this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVersion {
    /// Unique version identifier.
    pub id: Uuid,
    /// The template this version belongs to.
    pub template_id: Uuid,
    /// Sequential version number within the template.
    pub version_number: i32,
    /// Free-text description of what changed. May be empty.
    pub changes: String,
    /// The file captured by this version.
    pub file: VersionFile,
    /// Metadata captured alongside the file.
    pub metadata: VersionMetadata,
}

/// File attributes of a stored version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionFile {
    /// Name the file was uploaded with.
    pub original_name: String,
    /// Declared media type.
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Content hash, computed at upload time by the storage collaborator.
    /// Equal checksums are taken to mean byte-identical content.
    pub checksum: String,
    /// Opaque key under which the blob store holds the content.
    pub storage_key: String,
}

/// Non-file metadata of a version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionMetadata {
    /// Who created the version.
    pub author: String,
    /// Lifecycle status at snapshot time.
    pub status: TemplateStatus,
    /// When the version was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_round_trips_through_json() {
        let version = TemplateVersion {
            id: Uuid::new_v4(),
            template_id: Uuid::new_v4(),
            version_number: 3,
            changes: "Reworked intro".to_string(),
            file: VersionFile {
                original_name: "handbook.docx".to_string(),
                mime_type:
                    "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                        .to_string(),
                size_bytes: 4096,
                checksum: "abc123".to_string(),
                storage_key: "blobs/handbook-v3".to_string(),
            },
            metadata: VersionMetadata {
                author: "Alice".to_string(),
                status: TemplateStatus::Draft,
                created_at: Utc::now(),
            },
        };

        let json = serde_json::to_value(&version).unwrap();
        assert_eq!(json["versionNumber"], 3);
        assert_eq!(json["file"]["originalName"], "handbook.docx");

        let back: TemplateVersion = serde_json::from_value(json).unwrap();
        assert_eq!(back.version_number, version.version_number);
        assert_eq!(back.file.checksum, version.file.checksum);
    }
}
