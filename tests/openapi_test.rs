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

//! OpenAPI Integration Tests
//!
//! Verifies that the generated document covers every endpoint and that the
//! documentation routes are served.

#![allow(clippy::unwrap_used)]

mod test_support;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use serde_json::Value;
use test_support::{memory_app, send};
use tower::ServiceExt;
use utoipa::OpenApi;
use web420_server::api::ApiDoc;

fn document() -> Value {
    serde_json::to_value(ApiDoc::openapi()).unwrap()
}

#[test]
fn test_every_operation_is_documented() {
    let doc = document();
    let expected = [
        ("/health", "get", "health_check"),
        ("/api/composers", "get", "findAllComposers"),
        ("/api/composers", "post", "createComposer"),
        ("/api/composers/{id}", "get", "findComposerById"),
        ("/api/composers/{id}", "put", "updateComposerById"),
        ("/api/composers/{id}", "delete", "deleteComposerById"),
        ("/api/persons", "get", "findAllPersons"),
        ("/api/persons", "post", "createPerson"),
        ("/api/signup", "post", "signup"),
        ("/api/login", "post", "login"),
        ("/api/customers", "post", "createCustomer"),
        ("/api/customers/{userName}/invoices", "post", "createInvoiceByUserName"),
        ("/api/customers/{userName}/invoices", "get", "findAllInvoicesByUserName"),
        ("/api/teams", "get", "findAllTeams"),
        ("/api/teams/{id}/players", "post", "assignPlayerToTeam"),
        ("/api/teams/{id}/players", "get", "findAllPlayersByTeamId"),
        ("/api/teams/{id}", "delete", "deleteTeamById"),
    ];

    for (path, method, operation_id) in expected {
        let operation = &doc["paths"][path][method];
        assert!(operation.is_object(), "{method} {path} should be documented");
        assert_eq!(operation["operationId"], operation_id, "{method} {path}");
    }
}

#[test]
fn test_error_responses_are_documented() {
    let doc = document();
    let put = &doc["paths"]["/api/composers/{id}"]["put"]["responses"];
    for status in ["200", "401", "500", "501"] {
        assert!(put[status].is_object(), "PUT composer should document {status}");
    }
    assert_eq!(put["401"]["description"], "Invalid Composer ID");
}

#[test]
fn test_schemas_use_wire_names() {
    let doc = document();
    let schemas = &doc["components"]["schemas"];

    assert!(schemas["Composer"]["properties"]["firstName"].is_object());
    assert!(schemas["Customer"]["properties"]["userName"].is_object());
    assert!(schemas["Invoice"]["properties"]["lineItems"].is_object());
    assert!(schemas["ErrorResponse"]["properties"]["code"].is_object());
    assert!(schemas["SignupRequest"]["properties"]["emailAddress"].is_object());
    assert!(schemas.get("User").is_none(), "password hashes are never exposed");
}

#[tokio::test]
async fn test_openapi_json_is_served() {
    let (router, _) = memory_app();

    let (status, body) = send(&router, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "WEB 420 RESTful APIs");
    assert_eq!(body, document());
}

#[tokio::test]
async fn test_root_redirects_to_docs() {
    let (router, _) = memory_app();

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/api-docs");
}

#[tokio::test]
async fn test_swagger_ui_is_served() {
    let (router, _) = memory_app();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api-docs/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("swagger"));
}
