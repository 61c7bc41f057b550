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

//! REST API implementation.
//!
//! ## API Structure
//!
//! ```text
//! /                                     - Redirect to /api-docs
//! /health                               - Health check
//! /api-docs                             - Swagger UI
//! /api-docs/openapi.json                - OpenAPI document
//! /api/composers[/{id}]                 - Composer CRUD
//! /api/persons                          - Persons with roles and dependents
//! /api/signup, /api/login               - User registration and credential check
//! /api/customers[/{userName}/invoices]  - Customers and invoices
//! /api/teams[/{id}[/players]]           - Teams and players
//! ```
//!
//! ## Module Organization
//!
//! - `handlers` - one module per resource group
//! - `models` - request bodies
//! - `routes` - the `/api` route table
//! - `openapi` - the generated API document
//! - `error` - error taxonomy and its HTTP mapping

pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod responses;
pub mod routes;

pub use error::{error_codes, ApiError, ErrorResponse};
pub use extract::ApiJson;
pub use handlers::system::{health_check, redirect_to_docs, DOCS_PATH, OPENAPI_JSON_PATH};
pub use openapi::ApiDoc;
pub use responses::{HealthResponse, StatusResponse};
pub use routes::build_api_router;
