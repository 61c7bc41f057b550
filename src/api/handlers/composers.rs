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

//! Composer CRUD.

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use log::{debug, info};

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::extract::ApiJson;
use crate::api::models::ComposerRequest;
use crate::entities::Composer;
use crate::store::Repository;

/// List all composers
#[utoipa::path(
    get,
    path = "/api/composers",
    operation_id = "findAllComposers",
    responses(
        (status = 200, description = "Array of composer documents", body = [Composer]),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Composers"
)]
pub async fn find_all_composers(
    Extension(composers): Extension<Repository<Composer>>,
) -> Result<Json<Vec<Composer>>, ApiError> {
    let all = composers.list().await?;
    debug!("Found {} composer(s)", all.len());
    Ok(Json(all))
}

/// Get a composer by id
///
/// An unknown id answers 200 with a `null` body.
#[utoipa::path(
    get,
    path = "/api/composers/{id}",
    operation_id = "findComposerById",
    params(
        ("id" = String, Path, description = "Composer id")
    ),
    responses(
        (status = 200, description = "Composer document, or null when no composer has this id", body = Composer),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Composers"
)]
pub async fn find_composer_by_id(
    Extension(composers): Extension<Repository<Composer>>,
    Path(id): Path<String>,
) -> Result<Json<Option<Composer>>, ApiError> {
    Ok(Json(composers.get(&id).await?))
}

/// Create a composer
#[utoipa::path(
    post,
    path = "/api/composers",
    operation_id = "createComposer",
    request_body = ComposerRequest,
    responses(
        (status = 200, description = "The stored composer", body = Composer),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Composers"
)]
pub async fn create_composer(
    Extension(composers): Extension<Repository<Composer>>,
    ApiJson(request): ApiJson<ComposerRequest>,
) -> Result<Json<Composer>, ApiError> {
    let created = composers.create(Composer::from(request)).await?;
    info!(
        "Created composer {} {}",
        created.first_name, created.last_name
    );
    Ok(Json(created))
}

/// Replace a composer's names
#[utoipa::path(
    put,
    path = "/api/composers/{id}",
    operation_id = "updateComposerById",
    params(
        ("id" = String, Path, description = "Composer id")
    ),
    request_body = ComposerRequest,
    responses(
        (status = 200, description = "The updated composer", body = Composer),
        (status = 401, description = "Invalid Composer ID", body = ErrorResponse),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Composers"
)]
pub async fn update_composer_by_id(
    Extension(composers): Extension<Repository<Composer>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<ComposerRequest>,
) -> Result<Json<Composer>, ApiError> {
    let Some(mut composer) = composers.get(&id).await? else {
        return Err(ApiError::invalid_composer_id());
    };

    request.apply_to(&mut composer);
    if !composers.save(&mut composer).await? {
        return Err(ApiError::invalid_composer_id());
    }
    Ok(Json(composer))
}

/// Delete a composer
///
/// Answers with the removed document, or `null` when nothing matched.
#[utoipa::path(
    delete,
    path = "/api/composers/{id}",
    operation_id = "deleteComposerById",
    params(
        ("id" = String, Path, description = "Composer id")
    ),
    responses(
        (status = 200, description = "The removed composer, or null when no composer has this id", body = Composer),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Composers"
)]
pub async fn delete_composer_by_id(
    Extension(composers): Extension<Repository<Composer>>,
    Path(id): Path<String>,
) -> Result<Json<Option<Composer>>, ApiError> {
    let removed = composers.delete(&id).await?;
    if removed.is_some() {
        info!("Deleted composer {id}");
    }
    Ok(Json(removed))
}
