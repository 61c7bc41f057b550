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

//! Signup and login.
//!
//! Passwords are stored as bcrypt hashes. Hashing and verification are
//! CPU-bound and run on the blocking thread pool. Login issues no token or
//! session; it only confirms the credentials.

use axum::{extract::Extension, response::Json};
use log::info;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::extract::ApiJson;
use crate::api::models::{LoginRequest, SignupRequest};
use crate::api::responses::StatusResponse;
use crate::entities::User;
use crate::store::Repository;

/// bcrypt cost factor.
pub const SALT_ROUNDS: u32 = 10;

async fn hash_password(password: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, SALT_ROUNDS))
        .await
        .map_err(|e| ApiError::server(format!("Password hashing task failed: {e}")))?
        .map_err(|e| ApiError::server(format!("Password hashing failed: {e}")))
}

async fn verify_password(password: String, hash: String) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| ApiError::server(format!("Password verification task failed: {e}")))?
        .map_err(|e| ApiError::server(format!("Password verification failed: {e}")))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/signup",
    operation_id = "signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Registered User", body = StatusResponse),
        (status = 401, description = "Username is already in use", body = ErrorResponse),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Users"
)]
pub async fn signup(
    Extension(users): Extension<Repository<User>>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let user_name = request.user_name.unwrap_or_default();
    if users.find_by(User::USER_NAME_FIELD, &user_name).await?.is_some() {
        return Err(ApiError::username_in_use());
    }

    let password = request
        .password
        .ok_or_else(|| ApiError::server("Signup request has no password"))?;
    let hashed = hash_password(password).await?;

    users
        .create(User {
            id: None,
            user_name,
            password: hashed,
            email_address: request.email_address,
        })
        .await?;

    info!("Registered a new user");
    Ok(Json(StatusResponse::new("Registered User")))
}

/// Verify a user's credentials
///
/// Unknown users and wrong passwords get the same answer.
#[utoipa::path(
    post,
    path = "/api/login",
    operation_id = "login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "User logged in", body = StatusResponse),
        (status = 401, description = "Invalid username and/or password", body = ErrorResponse),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Users"
)]
pub async fn login(
    Extension(users): Extension<Repository<User>>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let user_name = request.user_name.unwrap_or_default();
    let Some(user) = users.find_by(User::USER_NAME_FIELD, &user_name).await? else {
        return Err(ApiError::invalid_credentials());
    };

    let password = request
        .password
        .ok_or_else(|| ApiError::server("Login request has no password"))?;
    if !verify_password(password, user.password).await? {
        return Err(ApiError::invalid_credentials());
    }

    Ok(Json(StatusResponse::new("User logged in")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_is_not_plaintext_and_verifies() {
        let hashed = hash_password("s3cret".to_string()).await.unwrap();
        assert_ne!(hashed, "s3cret");
        assert!(hashed.starts_with("$2"));

        assert!(verify_password("s3cret".to_string(), hashed.clone())
            .await
            .unwrap());
        assert!(!verify_password("wrong".to_string(), hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_against_malformed_hash_is_server_error() {
        let result = verify_password("s3cret".to_string(), "not-a-hash".to_string()).await;
        assert!(matches!(result, Err(ApiError::Server(_))));
    }
}
