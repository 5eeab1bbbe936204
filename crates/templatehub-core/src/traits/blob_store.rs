//! Blob store trait for pluggable file content backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Content-addressable blob storage, keyed by opaque storage keys.
///
/// The comparison core only ever reads file content; uploads, deletion, and
/// retention are owned by the surrounding CRUD layer. Implementations exist
/// for in-memory storage (`templatehub-store`); production deployments back
/// this with a local directory or an S3-compatible object store.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the raw bytes stored under `storage_key`.
    ///
    /// Returns `Ok(None)` when no blob exists for the key. Transport and
    /// backend failures surface as errors; callers decide whether to retry.
    async fn get_bytes(&self, storage_key: &str) -> AppResult<Option<Bytes>>;
}
