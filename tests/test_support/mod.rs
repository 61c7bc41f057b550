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

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use web420_server::entities::Team;
use web420_server::store::{Document, DocumentStore, StoreError, StoreResult};
use web420_server::{build_app, MemoryStore, Repository, WriteMode};

/// Router over a fresh in-memory store, with synchronous writes.
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    memory_app_with(WriteMode::Synchronous)
}

pub fn memory_app_with(write_mode: WriteMode) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (build_app(store.clone(), write_mode), store)
}

/// Send a request with an optional JSON body and decode the JSON response.
/// An empty response body decodes to `Value::Null`.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    dispatch(router, request).await
}

/// Send a raw body with the given content type.
pub async fn send_raw(
    router: &Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    dispatch(router, request).await
}

async fn dispatch(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Store a team directly, returning its id.
pub async fn seed_team(store: Arc<MemoryStore>, name: &str, mascot: &str) -> String {
    let teams: Repository<Team> = Repository::new(store);
    let team = teams
        .create(Team {
            name: Some(name.to_string()),
            mascot: Some(mascot.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    team.id.unwrap()
}

/// A store whose every operation fails, standing in for an unreachable database.
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Backend("server selection timeout".to_string())
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    fn generate_id(&self) -> String {
        "unused".to_string()
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(unavailable())
    }

    async fn find_all(&self, _collection: &str) -> StoreResult<Vec<Document>> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _collection: &str, _id: &str) -> StoreResult<Option<Document>> {
        Err(unavailable())
    }

    async fn find_one_by_field(
        &self,
        _collection: &str,
        _field: &str,
        _value: &str,
    ) -> StoreResult<Option<Document>> {
        Err(unavailable())
    }

    async fn insert(&self, _collection: &str, _document: Document) -> StoreResult<Document> {
        Err(unavailable())
    }

    async fn replace(&self, _collection: &str, _id: &str, _document: Document) -> StoreResult<bool> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _collection: &str, _id: &str) -> StoreResult<Option<Document>> {
        Err(unavailable())
    }
}

/// A store that serves reads and inserts from memory but fails every
/// `replace`, so a parent can be found but not re-saved.
#[derive(Clone, Default)]
pub struct SaveFailingStore {
    inner: MemoryStore,
}

impl SaveFailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.inner.count(collection).await
    }
}

#[async_trait]
impl DocumentStore for SaveFailingStore {
    fn backend_name(&self) -> &'static str {
        "save-failing"
    }

    fn generate_id(&self) -> String {
        self.inner.generate_id()
    }

    async fn ping(&self) -> StoreResult<()> {
        self.inner.ping().await
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.inner.find_all(collection).await
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        self.inner.find_by_id(collection, id).await
    }

    async fn find_one_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Option<Document>> {
        self.inner.find_one_by_field(collection, field, value).await
    }

    async fn insert(&self, collection: &str, document: Document) -> StoreResult<Document> {
        self.inner.insert(collection, document).await
    }

    async fn replace(&self, _collection: &str, _id: &str, _document: Document) -> StoreResult<bool> {
        Err(StoreError::Backend("write concern error".to_string()))
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        self.inner.delete_by_id(collection, id).await
    }
}
