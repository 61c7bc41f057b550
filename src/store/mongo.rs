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

//! MongoDB-backed document store.
//!
//! One [`mongodb::Client`] is opened at startup and shared by every request;
//! connection pooling and server selection are left to the driver. Top-level
//! identifiers are stored as `ObjectId` and exposed to the API as their hex
//! string form.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{self, doc, oid::ObjectId, Bson};
use mongodb::{Client, Database};
use serde_json::Value;

use super::{Document, DocumentStore, StoreError, StoreResult, ID_FIELD};

type BsonDocument = bson::Document;

pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connect to `uri` and select `database`.
    ///
    /// The driver connects lazily; a ping is issued here so that an
    /// unreachable server is reported at startup rather than on first request.
    pub async fn connect(uri: &str, database: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let store = Self {
            database: client.database(database),
            client,
        };
        store
            .ping()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        info!("Connected to MongoDB database '{database}'");
        Ok(store)
    }

    fn collection(&self, name: &str) -> mongodb::Collection<BsonDocument> {
        self.database.collection::<BsonDocument>(name)
    }
}

fn backend_error(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

/// Build an `_id` filter. Returns `None` for ids that are not valid ObjectIds,
/// which can never match a stored document.
fn id_filter(id: &str) -> Option<BsonDocument> {
    ObjectId::parse_str(id)
        .ok()
        .map(|oid| doc! { ID_FIELD: oid })
}

/// Convert an API document to BSON. A top-level `_id` holding an ObjectId hex
/// string is stored as a native ObjectId.
pub(crate) fn to_bson_document(collection: &str, mut document: Document) -> StoreResult<BsonDocument> {
    let id = document.remove(ID_FIELD);
    let mut converted =
        bson::to_document(&document).map_err(|e| StoreError::Serialization {
            collection: collection.to_string(),
            reason: e.to_string(),
        })?;

    if let Some(id) = id {
        let id = match id.as_str().map(ObjectId::parse_str) {
            Some(Ok(oid)) => Bson::ObjectId(oid),
            _ => Bson::try_from(id).map_err(|e| StoreError::Serialization {
                collection: collection.to_string(),
                reason: e.to_string(),
            })?,
        };
        converted.insert(ID_FIELD, id);
    }
    Ok(converted)
}

/// Convert a stored BSON document back to an API document. ObjectIds become
/// hex strings at any depth, so embedded documents created by other clients
/// decode like the ones this server writes. Everything else uses relaxed
/// extended JSON.
pub(crate) fn from_bson_document(document: BsonDocument) -> Document {
    match object_ids_to_hex(Bson::Document(document)).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => Document::new(),
    }
}

fn object_ids_to_hex(value: Bson) -> Bson {
    match value {
        Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
        Bson::Document(document) => Bson::Document(
            document
                .into_iter()
                .map(|(key, value)| (key, object_ids_to_hex(value)))
                .collect(),
        ),
        Bson::Array(items) => Bson::Array(items.into_iter().map(object_ids_to_hex).collect()),
        other => other,
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    fn generate_id(&self) -> String {
        ObjectId::new().to_hex()
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map(|_| ())
            .map_err(backend_error)
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let cursor = self
            .collection(collection)
            .find(None, None)
            .await
            .map_err(backend_error)?;
        let documents: Vec<BsonDocument> = cursor.try_collect().await.map_err(backend_error)?;
        debug!("Loaded {} document(s) from '{collection}'", documents.len());
        Ok(documents.into_iter().map(from_bson_document).collect())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let Some(filter) = id_filter(id) else {
            return Ok(None);
        };
        let found = self
            .collection(collection)
            .find_one(filter, None)
            .await
            .map_err(backend_error)?;
        Ok(found.map(from_bson_document))
    }

    async fn find_one_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Option<Document>> {
        let found = self
            .collection(collection)
            .find_one(doc! { field: value }, None)
            .await
            .map_err(backend_error)?;
        Ok(found.map(from_bson_document))
    }

    async fn insert(&self, collection: &str, mut document: Document) -> StoreResult<Document> {
        if !document.contains_key(ID_FIELD) {
            document.insert(ID_FIELD.to_string(), Value::String(self.generate_id()));
        }
        let bson_document = to_bson_document(collection, document.clone())?;
        self.collection(collection)
            .insert_one(bson_document, None)
            .await
            .map_err(backend_error)?;
        Ok(document)
    }

    async fn replace(&self, collection: &str, id: &str, document: Document) -> StoreResult<bool> {
        let Some(filter) = id_filter(id) else {
            return Ok(false);
        };
        let mut replacement = to_bson_document(collection, document)?;
        replacement.remove(ID_FIELD);
        let result = self
            .collection(collection)
            .replace_one(filter, replacement, None)
            .await
            .map_err(backend_error)?;
        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let Some(filter) = id_filter(id) else {
            return Ok(None);
        };
        let removed = self
            .collection(collection)
            .find_one_and_delete(filter, None)
            .await
            .map_err(backend_error)?;
        Ok(removed.map(from_bson_document))
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client closed");
    }
}
