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

//! REST API server for composers, persons, users, customers and teams.
//!
//! Documents live in a [`store::DocumentStore`] (MongoDB in production, an
//! in-memory store for tests and local runs). The HTTP surface is built with
//! axum and documented with an OpenAPI document served through Swagger UI.

pub mod api;
pub mod builder;
pub mod config;
pub mod entities;
pub mod logging;
pub mod server;
pub mod store;

// Main exports for library users
pub use builder::Web420ServerBuilder;
pub use config::{
    load_config_file, save_config_file, StorageConfig, Web420ServerConfig, WriteMode,
};
pub use server::{build_app, Web420Server};
pub use store::{DocumentStore, MemoryStore, MongoStore, Repository, StoreError};
