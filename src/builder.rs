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

use std::sync::Arc;

use crate::config::{StorageConfig, WriteMode};
use crate::server::Web420Server;
use crate::store::{open_store, DocumentStore, MemoryStore, StoreError};

/// Builder for creating a Web420Server instance programmatically
pub struct Web420ServerBuilder {
    store: Option<Arc<dyn DocumentStore>>,
    storage: StorageConfig,
    write_mode: WriteMode,
    port: u16,
    host: String,
}

impl Default for Web420ServerBuilder {
    fn default() -> Self {
        Self {
            store: None,
            storage: StorageConfig::Memory,
            write_mode: WriteMode::default(),
            port: 3000,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Web420ServerBuilder {
    /// Create a new builder backed by an in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already opened store. Takes precedence over any storage
    /// configuration.
    pub fn with_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Keep documents in process memory
    pub fn with_memory_store(mut self) -> Self {
        self.store = Some(Arc::new(MemoryStore::new()));
        self
    }

    /// Connect to MongoDB when the server is built
    pub fn with_mongodb(mut self, uri: impl Into<String>, database: impl Into<String>) -> Self {
        self.store = None;
        self.storage = StorageConfig::Mongodb {
            uri: uri.into(),
            database: database.into(),
        };
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host_port(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Open the configured store and build the server
    pub async fn build(self) -> Result<Web420Server, StoreError> {
        let store = match self.store {
            Some(store) => store,
            None => open_store(&self.storage).await?,
        };
        Ok(Web420Server::from_store(
            store,
            self.host,
            self.port,
            self.write_mode,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Web420ServerBuilder::new();
        assert_eq!(builder.host, "127.0.0.1");
        assert_eq!(builder.port, 3000);
        assert_eq!(builder.storage, StorageConfig::Memory);
        assert_eq!(builder.write_mode, WriteMode::Synchronous);
        assert!(builder.store.is_none());
    }

    #[test]
    fn test_builder_fluent_api() {
        let builder = Web420ServerBuilder::new()
            .with_memory_store()
            .with_write_mode(WriteMode::Deferred)
            .with_host_port("0.0.0.0", 9090);

        assert!(builder.store.is_some());
        assert_eq!(builder.host, "0.0.0.0");
        assert_eq!(builder.port, 9090);
        assert_eq!(builder.write_mode, WriteMode::Deferred);
    }

    #[test]
    fn test_with_mongodb_replaces_store() {
        let builder = Web420ServerBuilder::new()
            .with_memory_store()
            .with_mongodb("mongodb://localhost:27017", "web420");

        assert!(builder.store.is_none());
        assert!(matches!(builder.storage, StorageConfig::Mongodb { .. }));
    }

    #[tokio::test]
    async fn test_build_with_memory_store() {
        let server = Web420ServerBuilder::new()
            .with_port(4420)
            .with_write_mode(WriteMode::Deferred)
            .build()
            .await
            .unwrap();

        assert_eq!(server.address(), "127.0.0.1:4420");
        assert_eq!(server.write_mode(), WriteMode::Deferred);
    }
}
