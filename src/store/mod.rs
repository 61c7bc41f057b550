// Copyright 2025 Phuong Tran.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Document storage for the API.
//!
//! The server talks to its database through the [`DocumentStore`] trait. A store
//! holds schema-flexible JSON documents in named collections and assigns every
//! top-level document an opaque string identifier under the `_id` key.
//!
//! Two backends are provided:
//! - [`MongoStore`] - MongoDB via the official driver (production)
//! - [`MemoryStore`] - insertion-ordered in-process maps (tests, local runs)
//!
//! Handlers never touch a store directly; they go through a typed
//! [`Repository`] which enforces each entity's required fields before writing.

pub mod memory;
pub mod mongo;
pub mod repository;

use async_trait::async_trait;
use log::warn;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::config::StorageConfig;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use repository::{Entity, Repository};

/// A stored document: a JSON object whose `_id` key holds the identifier.
pub type Document = Map<String, Value>;

/// Key under which every document carries its identifier.
pub const ID_FIELD: &str = "_id";

/// Errors raised by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Failed to connect to storage: {0}")]
    Connection(String),

    #[error("Validation failed for {collection}: path `{field}` is required")]
    Validation { collection: String, field: String },

    #[error("Document in {collection} could not be converted: {reason}")]
    Serialization { collection: String, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Async access to a document database.
///
/// Implementations are shared process-wide behind an `Arc` and must be safe
/// to call from concurrent requests. No method retries; a failed call is
/// reported to the caller as-is.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short name of the backend, used in logs and the health endpoint.
    fn backend_name(&self) -> &'static str;

    /// Generate a fresh identifier in the backend's native format.
    fn generate_id(&self) -> String;

    /// Check that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Return every document in the collection, in stored order.
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Look up a document by identifier. Unknown or malformed ids yield `None`.
    async fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Return the first document whose `field` equals `value`.
    async fn find_one_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Option<Document>>;

    /// Insert a document, assigning an `_id` when it has none. Returns the
    /// document as stored.
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<Document>;

    /// Replace the document with the given id. Returns `false` when nothing
    /// matched.
    async fn replace(&self, collection: &str, id: &str, document: Document) -> StoreResult<bool>;

    /// Remove a document by id, returning it if it existed.
    async fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Release backend resources. Called once at shutdown.
    async fn close(&self) {}
}

/// Open the store described by the storage configuration.
pub async fn open_store(config: &StorageConfig) -> StoreResult<Arc<dyn DocumentStore>> {
    match config {
        StorageConfig::Mongodb { uri, database } => {
            Ok(Arc::new(MongoStore::connect(uri, database).await?))
        }
        StorageConfig::Memory => {
            warn!("Using the in-memory store; data will be lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Read the identifier of a document, if it has one.
pub fn document_id(document: &Document) -> Option<&str> {
    document.get(ID_FIELD).and_then(Value::as_str)
}
