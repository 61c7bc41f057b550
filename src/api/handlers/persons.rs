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

use axum::{extract::Extension, response::Json};
use log::info;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::extract::ApiJson;
use crate::api::models::PersonRequest;
use crate::entities::Person;
use crate::store::Repository;

/// List all persons
#[utoipa::path(
    get,
    path = "/api/persons",
    operation_id = "findAllPersons",
    responses(
        (status = 200, description = "Array of person documents", body = [Person]),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Persons"
)]
pub async fn find_all_persons(
    Extension(persons): Extension<Repository<Person>>,
) -> Result<Json<Vec<Person>>, ApiError> {
    Ok(Json(persons.list().await?))
}

/// Create a person with roles and dependents
#[utoipa::path(
    post,
    path = "/api/persons",
    operation_id = "createPerson",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "The stored person", body = Person),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Persons"
)]
pub async fn create_person(
    Extension(persons): Extension<Repository<Person>>,
    ApiJson(request): ApiJson<PersonRequest>,
) -> Result<Json<Person>, ApiError> {
    let created = persons.create(Person::from(request)).await?;
    info!(
        "Created person with {} role(s) and {} dependent(s)",
        created.roles.len(),
        created.dependents.len()
    );
    Ok(Json(created))
}
