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

//! Typed access to a collection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{Document, DocumentStore, StoreError, StoreResult, ID_FIELD};

/// A top-level document type stored in its own collection.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the backing collection.
    const COLLECTION: &'static str;

    /// Wire names of fields that must be present and non-empty on every write.
    const REQUIRED_FIELDS: &'static [&'static str] = &[];

    /// Identifier assigned by the store, if the entity has been saved.
    fn id(&self) -> Option<&str>;

    /// Give embedded documents that lack an identifier a fresh one.
    fn assign_embedded_ids(&mut self, _next_id: &mut dyn FnMut() -> String) {}
}

/// Repository over one collection of `T`, sharing the process-wide store.
pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    pub async fn list(&self) -> StoreResult<Vec<T>> {
        self.store
            .find_all(T::COLLECTION)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<T>> {
        self.store
            .find_by_id(T::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn find_by(&self, field: &str, value: &str) -> StoreResult<Option<T>> {
        self.store
            .find_one_by_field(T::COLLECTION, field, value)
            .await?
            .map(decode)
            .transpose()
    }

    /// Validate and insert a new entity, returning it with its identifier.
    pub async fn create(&self, mut entity: T) -> StoreResult<T> {
        let document = self.prepare(&mut entity)?;
        let stored = self.store.insert(T::COLLECTION, document).await?;
        decode(stored)
    }

    /// Validate and overwrite an existing entity. Returns `false` when the
    /// entity has no identifier or no longer exists.
    pub async fn save(&self, entity: &mut T) -> StoreResult<bool> {
        let Some(id) = entity.id().map(str::to_string) else {
            return Ok(false);
        };
        let document = self.prepare(entity)?;
        self.store.replace(T::COLLECTION, &id, document).await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<Option<T>> {
        self.store
            .delete_by_id(T::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    fn prepare(&self, entity: &mut T) -> StoreResult<Document> {
        let store = &self.store;
        entity.assign_embedded_ids(&mut || store.generate_id());
        let document = encode(entity)?;
        check_required::<T>(&document)?;
        Ok(document)
    }
}

fn encode<T: Entity>(entity: &T) -> StoreResult<Document> {
    match serde_json::to_value(entity) {
        Ok(Value::Object(mut map)) => {
            if map.get(ID_FIELD).is_some_and(Value::is_null) {
                map.remove(ID_FIELD);
            }
            Ok(map)
        }
        Ok(other) => Err(StoreError::Serialization {
            collection: T::COLLECTION.to_string(),
            reason: format!("expected an object, got {other}"),
        }),
        Err(e) => Err(StoreError::Serialization {
            collection: T::COLLECTION.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn decode<T: Entity>(document: Document) -> StoreResult<T> {
    serde_json::from_value(Value::Object(document)).map_err(|e| StoreError::Serialization {
        collection: T::COLLECTION.to_string(),
        reason: e.to_string(),
    })
}

/// A required field must exist, must not be null, and must not be an empty
/// string.
fn check_required<T: Entity>(document: &Document) -> StoreResult<()> {
    for field in T::REQUIRED_FIELDS {
        let present = match document.get(*field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !present {
            return Err(StoreError::Validation {
                collection: T::COLLECTION.to_string(),
                field: (*field).to_string(),
            });
        }
    }
    Ok(())
}
