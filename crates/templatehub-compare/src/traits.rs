//! Version store trait: the comparator's read-only view of templates and
//! their versions.

use async_trait::async_trait;
use uuid::Uuid;

use templatehub_core::result::AppResult;
use templatehub_entity::{Template, TemplateVersion};

/// Read access to templates and version records.
///
/// Versions are created, listed, and restored by the surrounding CRUD layer;
/// the comparison core only ever fetches individual records by id.
/// `templatehub-store` ships an in-memory implementation; production
/// deployments back this with a document database.
#[async_trait]
pub trait TemplateStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch a template by id. `Ok(None)` when it does not exist.
    async fn get_template(&self, id: Uuid) -> AppResult<Option<Template>>;

    /// Fetch a version record by id. `Ok(None)` when it does not exist.
    async fn get_version(&self, id: Uuid) -> AppResult<Option<TemplateVersion>>;
}
