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

//! Route table for the `/api` prefix.

use axum::{
    extract::Extension,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use super::handlers::{composers, customers, persons, sessions, teams};
use crate::config::WriteMode;
use crate::entities::{Composer, Customer, Person, Team, User};
use crate::store::{DocumentStore, Repository};

/// Build the router for every resource group, to be nested under `/api`.
///
/// Each group gets the repository for its own collection; all of them share
/// `store`.
pub fn build_api_router(store: Arc<dyn DocumentStore>, write_mode: WriteMode) -> Router {
    Router::new()
        .merge(composer_routes(store.clone()))
        .merge(person_routes(store.clone()))
        .merge(session_routes(store.clone()))
        .merge(customer_routes(store.clone()))
        .merge(team_routes(store))
        .layer(Extension(write_mode))
}

fn composer_routes(store: Arc<dyn DocumentStore>) -> Router {
    Router::new()
        .route("/composers", get(composers::find_all_composers))
        .route("/composers", post(composers::create_composer))
        .route("/composers/:id", get(composers::find_composer_by_id))
        .route("/composers/:id", put(composers::update_composer_by_id))
        .route("/composers/:id", delete(composers::delete_composer_by_id))
        .layer(Extension(Repository::<Composer>::new(store)))
}

fn person_routes(store: Arc<dyn DocumentStore>) -> Router {
    Router::new()
        .route("/persons", get(persons::find_all_persons))
        .route("/persons", post(persons::create_person))
        .layer(Extension(Repository::<Person>::new(store)))
}

fn session_routes(store: Arc<dyn DocumentStore>) -> Router {
    Router::new()
        .route("/signup", post(sessions::signup))
        .route("/login", post(sessions::login))
        .layer(Extension(Repository::<User>::new(store)))
}

fn customer_routes(store: Arc<dyn DocumentStore>) -> Router {
    Router::new()
        .route("/customers", post(customers::create_customer))
        .route(
            "/customers/:userName/invoices",
            post(customers::create_invoice_by_user_name),
        )
        .route(
            "/customers/:userName/invoices",
            get(customers::find_all_invoices_by_user_name),
        )
        .layer(Extension(Repository::<Customer>::new(store)))
}

fn team_routes(store: Arc<dyn DocumentStore>) -> Router {
    Router::new()
        .route("/teams", get(teams::find_all_teams))
        .route("/teams/:id/players", post(teams::assign_player_to_team))
        .route("/teams/:id/players", get(teams::find_all_players_by_team_id))
        .route("/teams/:id", delete(teams::delete_team_by_id))
        .layer(Extension(Repository::<Team>::new(store)))
}
