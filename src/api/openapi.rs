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

//! OpenAPI document for the server.
//!
//! The document is served as JSON at `/api-docs/openapi.json` and browsed
//! through Swagger UI at `/api-docs`.

use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::handlers;
use super::models::{
    ComposerRequest, CustomerRequest, InvoiceRequest, LoginRequest, PersonRequest, PlayerRequest,
    SignupRequest,
};
use super::responses::{HealthResponse, StatusResponse};
use crate::entities::{Composer, Customer, Dependent, Invoice, LineItem, Person, Player, Role, Team};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::system::health_check,
        handlers::composers::find_all_composers,
        handlers::composers::find_composer_by_id,
        handlers::composers::create_composer,
        handlers::composers::update_composer_by_id,
        handlers::composers::delete_composer_by_id,
        handlers::persons::find_all_persons,
        handlers::persons::create_person,
        handlers::sessions::signup,
        handlers::sessions::login,
        handlers::customers::create_customer,
        handlers::customers::create_invoice_by_user_name,
        handlers::customers::find_all_invoices_by_user_name,
        handlers::teams::find_all_teams,
        handlers::teams::assign_player_to_team,
        handlers::teams::find_all_players_by_team_id,
        handlers::teams::delete_team_by_id,
    ),
    components(
        schemas(
            Composer,
            Person,
            Role,
            Dependent,
            Customer,
            Invoice,
            LineItem,
            Team,
            Player,
            ComposerRequest,
            PersonRequest,
            SignupRequest,
            LoginRequest,
            CustomerRequest,
            InvoiceRequest,
            PlayerRequest,
            StatusResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Composers", description = "Composer documents"),
        (name = "Persons", description = "Persons with roles and dependents"),
        (name = "Users", description = "Signup and login"),
        (name = "Customers", description = "Customers and their invoices"),
        (name = "Teams", description = "Teams and their players"),
    ),
    info(
        title = "WEB 420 RESTful APIs",
        version = "1.0.0",
        description = "REST API over a document database.\n\n## Errors\n\nEvery error body has the shape `{\"code\", \"message\"}`:\n- `401` - the request was understood but refused (unknown id or user name, taken user name, bad credentials)\n- `500` - `Server Exception`, including malformed request bodies\n- `501` - `MongoDB Exception`, the database operation failed\n\nNo endpoint requires authentication.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDoc;
