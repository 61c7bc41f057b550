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

use axum::{
    extract::Extension,
    response::{Json, Redirect},
};
use log::warn;
use std::sync::Arc;

use crate::api::responses::HealthResponse;
use crate::store::DocumentStore;

/// Location of the interactive API documentation.
pub const DOCS_PATH: &str = "/api-docs";

/// Location of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Send visitors of the site root to the API documentation.
pub async fn redirect_to_docs() -> Redirect {
    Redirect::temporary(DOCS_PATH)
}

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server health and storage reachability", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_check(
    Extension(store): Extension<Arc<dyn DocumentStore>>,
) -> Json<HealthResponse> {
    let status = match store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!("Health check could not reach storage: {e}");
            "degraded"
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        storage: store.backend_name().to_string(),
        timestamp: chrono::Utc::now(),
    })
}
