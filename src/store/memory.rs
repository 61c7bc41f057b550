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

//! In-process document store.
//!
//! Collections are insertion-ordered maps guarded by a single async lock, so
//! every call observes a consistent snapshot. Nothing is written to disk.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{document_id, Document, DocumentStore, StoreResult, ID_FIELD};

type Collection = IndexMap<String, Document>;

/// Thread-safe in-memory [`DocumentStore`].
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<IndexMap<String, Collection>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection.
    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, IndexMap::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn find_one_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|docs| {
            docs.values()
                .find(|doc| doc.get(field).and_then(Value::as_str) == Some(value))
                .cloned()
        }))
    }

    async fn insert(&self, collection: &str, mut document: Document) -> StoreResult<Document> {
        let id = match document_id(&document) {
            Some(id) => id.to_string(),
            None => {
                let id = self.generate_id();
                document.insert(ID_FIELD.to_string(), Value::String(id.clone()));
                id
            }
        };

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id, document.clone());
        Ok(document)
    }

    async fn replace(&self, collection: &str, id: &str, mut document: Document) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        let Some(slot) = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
        else {
            return Ok(false);
        };
        document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
        *slot = document;
        Ok(true)
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .and_then(|docs| docs.shift_remove(id)))
    }
}
