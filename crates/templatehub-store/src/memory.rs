//! DashMap-backed stores.

use bytes::Bytes;
use dashmap::DashMap;
use uuid::Uuid;

use async_trait::async_trait;
use tracing::debug;

use templatehub_compare::TemplateStore;
use templatehub_core::traits::BlobStore;
use templatehub_core::AppResult;
use templatehub_entity::{Template, TemplateVersion};

/// In-memory template and version store.
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    templates: DashMap<Uuid, Template>,
    versions: DashMap<Uuid, TemplateVersion>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a template record.
    pub fn insert_template(&self, template: Template) {
        debug!(template_id = %template.id, name = %template.name, "Template stored");
        self.templates.insert(template.id, template);
    }

    /// Insert or replace a version record.
    pub fn insert_version(&self, version: TemplateVersion) {
        debug!(
            version_id = %version.id,
            template_id = %version.template_id,
            number = version.version_number,
            "Version stored"
        );
        self.versions.insert(version.id, version);
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn get_template(&self, id: Uuid) -> AppResult<Option<Template>> {
        Ok(self.templates.get(&id).map(|entry| entry.clone()))
    }

    async fn get_version(&self, id: Uuid) -> AppResult<Option<TemplateVersion>> {
        Ok(self.versions.get(&id).map(|entry| entry.clone()))
    }
}

/// In-memory blob store keyed by storage key.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: DashMap<String, Bytes>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a blob and return its content checksum (BLAKE3, hex).
    ///
    /// Version records should carry the returned checksum so that the
    /// comparator's equal-checksum short-circuit works.
    pub fn put(&self, storage_key: impl Into<String>, bytes: Bytes) -> String {
        let checksum = blake3::hash(&bytes).to_hex().to_string();
        let storage_key = storage_key.into();
        debug!(%storage_key, size = bytes.len(), "Blob stored");
        self.blobs.insert(storage_key, bytes);
        checksum
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get_bytes(&self, storage_key: &str) -> AppResult<Option<Bytes>> {
        Ok(self.blobs.get(storage_key).map(|entry| entry.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use templatehub_entity::{TemplateMetadata, TemplateStatus};

    fn sample_template(id: Uuid) -> Template {
        Template {
            id,
            name: "Offer Letter".to_string(),
            description: "Standard offer letter".to_string(),
            category: "HR".to_string(),
            department: "People".to_string(),
            tags: vec![],
            metadata: TemplateMetadata {
                author: "system".to_string(),
                status: TemplateStatus::Draft,
                version: 1,
                last_modified: Utc::now(),
            },
        }
    }

    #[tokio::test]
    async fn templates_round_trip() {
        let store = MemoryTemplateStore::new();
        let id = Uuid::new_v4();
        store.insert_template(sample_template(id));

        let found = store.get_template(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Offer Letter");
        assert!(store.get_template(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn blobs_round_trip_and_hash_deterministically() {
        let store = MemoryBlobStore::new();
        let c1 = store.put("k1", Bytes::from_static(b"hello"));
        let c2 = store.put("k2", Bytes::from_static(b"hello"));
        let c3 = store.put("k3", Bytes::from_static(b"other"));

        assert_eq!(c1, c2);
        assert_ne!(c1, c3);
        assert_eq!(
            store.get_bytes("k1").await.unwrap().unwrap(),
            Bytes::from_static(b"hello")
        );
        assert!(store.get_bytes("missing").await.unwrap().is_none());
    }
}
