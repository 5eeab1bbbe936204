//! Template entity: the parent document that owns an ordered sequence of
//! versions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    /// Work in progress, not yet reviewed.
    Draft,
    /// Reviewed and approved for use.
    Approved,
    /// Superseded; kept for history only.
    Deprecated,
}

impl std::fmt::Display for TemplateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Approved => write!(f, "approved"),
            Self::Deprecated => write!(f, "deprecated"),
        }
    }
}

/// A document template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique template identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Organizational category (e.g. "Forms", "Reports").
    pub category: String,
    /// Owning department.
    pub department: String,
    /// Search tags.
    pub tags: Vec<String>,
    /// Current-state metadata, denormalized from the latest version.
    pub metadata: TemplateMetadata,
}

/// Denormalized current-state metadata of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    /// Author of the latest change.
    pub author: String,
    /// Current lifecycle status.
    pub status: TemplateStatus,
    /// Current version number.
    pub version: i32,
    /// When the template was last modified.
    pub last_modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TemplateStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(TemplateStatus::Deprecated.to_string(), "deprecated");
    }
}
