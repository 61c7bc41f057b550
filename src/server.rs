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

use anyhow::Result;
use axum::{extract::Extension, routing::get, Router};
use log::{error, info};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::config::{StorageConfig, Web420ServerConfig, WriteMode};
use crate::store::{open_store, DocumentStore};

pub struct Web420Server {
    host: String,
    port: u16,
    storage: StorageConfig,
    write_mode: WriteMode,
    store: Option<Arc<dyn DocumentStore>>,
    config_file_path: Option<String>,
}

impl Web420Server {
    /// Create a server from an already loaded configuration. `port` takes
    /// precedence over the configured one.
    pub fn from_config(
        config: Web420ServerConfig,
        port: u16,
        config_file_path: Option<String>,
    ) -> Self {
        Self {
            host: config.server.host,
            port,
            storage: config.storage,
            write_mode: config.writes,
            store: None,
            config_file_path,
        }
    }

    /// Create a server around an already opened store (for use with builder).
    pub fn from_store(
        store: Arc<dyn DocumentStore>,
        host: String,
        port: u16,
        write_mode: WriteMode,
    ) -> Self {
        Self {
            host,
            port,
            storage: StorageConfig::Memory,
            write_mode,
            store: Some(store),
            config_file_path: None,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Open storage, bind the listener and serve until Ctrl-C.
    #[allow(clippy::print_stdout)]
    pub async fn run(self) -> Result<()> {
        let addr = self.address();
        println!("Starting web420 server");
        if let Some(config_file) = &self.config_file_path {
            println!("  Config file: {config_file}");
        }
        println!("  Listening on: {addr}");
        match &self.store {
            Some(store) => println!("  Storage: {}", store.backend_name()),
            None => println!("  Storage: {}", self.storage),
        }
        println!("  Writes: {:?}", self.write_mode);

        let store = self.resolve_store().await?;
        let listener = TcpListener::bind(&addr).await?;
        serve_app(listener, store, self.write_mode, shutdown_signal()).await
    }

    /// Serve on an existing listener until `shutdown` completes.
    pub async fn run_with_listener<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let store = self.resolve_store().await?;
        serve_app(listener, store, self.write_mode, shutdown).await
    }

    async fn resolve_store(&self) -> Result<Arc<dyn DocumentStore>> {
        match &self.store {
            Some(store) => Ok(store.clone()),
            None => {
                info!("Opening {} storage", self.storage);
                Ok(open_store(&self.storage).await?)
            }
        }
    }
}

/// Build the complete application router.
pub fn build_app(store: Arc<dyn DocumentStore>, write_mode: WriteMode) -> Router {
    let openapi = api::ApiDoc::openapi();

    Router::new()
        .route("/", get(api::redirect_to_docs))
        .route("/health", get(api::health_check))
        .nest("/api", api::build_api_router(store.clone(), write_mode))
        .merge(SwaggerUi::new(api::DOCS_PATH).url(api::OPENAPI_JSON_PATH, openapi))
        .layer(Extension(store))
        .layer(CorsLayer::permissive())
}

async fn serve_app<F>(
    listener: TcpListener,
    store: Arc<dyn DocumentStore>,
    write_mode: WriteMode,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(store.clone(), write_mode);

    let addr = listener.local_addr()?;
    info!("API available at http://{addr}/api/");
    info!("Swagger UI available at http://{addr}{}/", api::DOCS_PATH);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    info!("Shutting down web420 server");
    store.close().await;

    if let Err(e) = &served {
        error!("Web API server error: {e}");
    }
    Ok(served?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for the shutdown signal: {e}");
    }
}
