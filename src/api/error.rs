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

//! Error types and their HTTP mapping.
//!
//! Failures fall into three groups:
//! - storage failures (the database call itself failed) answer 501
//! - server failures (anything else that went wrong while handling the
//!   request, including malformed bodies) answer 500
//! - rejected requests (bad credentials, unknown ids, taken usernames)
//!   answer 401
//!
//! Nothing is retried; each failure ends the request.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, info};
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::StoreError;

/// Error codes for API responses
pub mod error_codes {
    pub const STORAGE_FAILURE: &str = "STORAGE_FAILURE";
    pub const SERVER_EXCEPTION: &str = "SERVER_EXCEPTION";

    pub const INVALID_COMPOSER_ID: &str = "INVALID_COMPOSER_ID";
    pub const INVALID_TEAM_ID: &str = "INVALID_TEAM_ID";
    pub const INVALID_USER_NAME: &str = "INVALID_USER_NAME";
    pub const USERNAME_IN_USE: &str = "USERNAME_IN_USE";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
}

pub const STORAGE_FAILURE_MESSAGE: &str = "MongoDB Exception";
pub const SERVER_EXCEPTION_MESSAGE: &str = "Server Exception";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username and/or password";

/// API error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Technical details, when safe to share
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Failure of a single request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("{0}")]
    Server(String),

    #[error("{message}")]
    Unauthorized {
        code: &'static str,
        message: &'static str,
    },
}

impl ApiError {
    pub fn invalid_composer_id() -> Self {
        Self::Unauthorized {
            code: error_codes::INVALID_COMPOSER_ID,
            message: "Invalid Composer ID",
        }
    }

    pub fn invalid_team_id() -> Self {
        Self::Unauthorized {
            code: error_codes::INVALID_TEAM_ID,
            message: "Invalid teamId.",
        }
    }

    pub fn invalid_user_name() -> Self {
        Self::Unauthorized {
            code: error_codes::INVALID_USER_NAME,
            message: "Invalid userName.",
        }
    }

    pub fn username_in_use() -> Self {
        Self::Unauthorized {
            code: error_codes::USERNAME_IN_USE,
            message: "Username is already in use",
        }
    }

    /// Used for both unknown users and wrong passwords so the two cannot be
    /// told apart.
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized {
            code: error_codes::INVALID_CREDENTIALS,
            message: INVALID_CREDENTIALS_MESSAGE,
        }
    }

    pub fn server(reason: impl Into<String>) -> Self {
        Self::Server(reason.into())
    }

    /// HTTP status this failure answers with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Storage(_) => StatusCode::NOT_IMPLEMENTED,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        match err {
            // Driver messages can leak connection details; keep them in the logs.
            ApiError::Storage(_) => {
                ErrorResponse::new(error_codes::STORAGE_FAILURE, STORAGE_FAILURE_MESSAGE)
            }
            ApiError::Server(reason) => {
                ErrorResponse::new(error_codes::SERVER_EXCEPTION, SERVER_EXCEPTION_MESSAGE)
                    .with_details(reason)
            }
            ApiError::Unauthorized { code, message } => ErrorResponse::new(code, message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Server(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(err) => error!("Storage failure: {err}"),
            ApiError::Server(reason) => error!("Server exception: {reason}"),
            ApiError::Unauthorized { message, .. } => info!("Request rejected: {message}"),
        }
        let status = self.status();
        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}
