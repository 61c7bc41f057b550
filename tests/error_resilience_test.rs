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

//! Behavior when the database is unreachable.
//!
//! Every endpoint that touches storage must answer 501 with the generic
//! storage message, without leaking driver details.

#![allow(clippy::unwrap_used)]

mod test_support;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use test_support::{send, FailingStore};
use web420_server::{build_app, WriteMode};

fn failing_app() -> axum::Router {
    build_app(Arc::new(FailingStore), WriteMode::Synchronous)
}

#[tokio::test]
async fn test_every_endpoint_reports_storage_failure() {
    let router = failing_app();
    let player = json!({"firstName": "Ann"});
    let names = json!({"firstName": "A", "lastName": "B", "userName": "ab"});
    let credentials = json!({"userName": "ab", "password": "pw"});

    let requests: Vec<(Method, &str, Option<Value>)> = vec![
        (Method::GET, "/api/composers", None),
        (Method::GET, "/api/composers/65c0f1a2b3c4d5e6f7a8b9c0", None),
        (Method::POST, "/api/composers", Some(names.clone())),
        (Method::PUT, "/api/composers/65c0f1a2b3c4d5e6f7a8b9c0", Some(names.clone())),
        (Method::DELETE, "/api/composers/65c0f1a2b3c4d5e6f7a8b9c0", None),
        (Method::GET, "/api/persons", None),
        (Method::POST, "/api/persons", Some(names.clone())),
        (Method::POST, "/api/signup", Some(credentials.clone())),
        (Method::POST, "/api/login", Some(credentials)),
        (Method::POST, "/api/customers", Some(names)),
        (Method::POST, "/api/customers/ab/invoices", Some(json!({"subtotal": 1.0}))),
        (Method::GET, "/api/customers/ab/invoices", None),
        (Method::GET, "/api/teams", None),
        (Method::POST, "/api/teams/65c0f1a2b3c4d5e6f7a8b9c0/players", Some(player)),
        (Method::GET, "/api/teams/65c0f1a2b3c4d5e6f7a8b9c0/players", None),
        (Method::DELETE, "/api/teams/65c0f1a2b3c4d5e6f7a8b9c0", None),
    ];

    for (method, uri, body) in requests {
        let (status, response) = send(&router, method.clone(), uri, body).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED, "{method} {uri}");
        assert_eq!(
            response,
            json!({"code": "STORAGE_FAILURE", "message": "MongoDB Exception"}),
            "{method} {uri}"
        );
    }
}

#[tokio::test]
async fn test_health_reports_degraded_storage() {
    let router = failing_app();

    let (status, body) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["storage"], "failing");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_malformed_body_fails_before_storage() {
    let router = failing_app();

    let (status, body) = test_support::send_raw(
        &router,
        Method::POST,
        "/api/login",
        "application/json",
        "[1, 2",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Server Exception");
}

#[tokio::test]
async fn test_form_encoded_body_is_rejected() {
    let router = failing_app();

    let (status, body) = test_support::send_raw(
        &router,
        Method::POST,
        "/api/composers",
        "application/x-www-form-urlencoded",
        "firstName=Clara&lastName=Schumann",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "SERVER_EXCEPTION");
    assert!(body["details"].is_string());
}
