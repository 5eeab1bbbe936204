//! # templatehub-store
//!
//! In-memory implementations of the storage traits. Suitable for tests,
//! demos, and single-node deployments; a production deployment swaps these
//! for database- and object-storage-backed implementations behind the same
//! traits.

pub mod memory;

pub use memory::{MemoryBlobStore, MemoryTemplateStore};
