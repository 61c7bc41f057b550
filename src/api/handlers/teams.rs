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

//! Teams and their player rosters.
//!
//! Teams are seeded directly in the database; the API reads them, edits their
//! rosters and deletes them.

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use log::info;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::extract::ApiJson;
use crate::api::models::PlayerRequest;
use crate::api::responses::StatusResponse;
use crate::config::WriteMode;
use crate::entities::{Player, Team};
use crate::store::Repository;

use super::persist_parent;

/// List all teams
#[utoipa::path(
    get,
    path = "/api/teams",
    operation_id = "findAllTeams",
    responses(
        (status = 200, description = "Array of team documents", body = [Team]),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Teams"
)]
pub async fn find_all_teams(
    Extension(teams): Extension<Repository<Team>>,
) -> Result<Json<Vec<Team>>, ApiError> {
    Ok(Json(teams.list().await?))
}

/// Add a player to a team
#[utoipa::path(
    post,
    path = "/api/teams/{id}/players",
    operation_id = "assignPlayerToTeam",
    params(
        ("id" = String, Path, description = "Team id")
    ),
    request_body = PlayerRequest,
    responses(
        (status = 200, description = "The added player", body = Player),
        (status = 401, description = "Invalid teamId.", body = ErrorResponse),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Teams"
)]
pub async fn assign_player_to_team(
    Extension(teams): Extension<Repository<Team>>,
    Extension(write_mode): Extension<WriteMode>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<PlayerRequest>,
) -> Result<Json<Player>, ApiError> {
    let Some(mut team) = teams.get(&id).await? else {
        return Err(ApiError::invalid_team_id());
    };

    team.players.push(Player::from(request));
    let mut saved = persist_parent(&teams, team, write_mode, ApiError::invalid_team_id).await?;

    let player = saved
        .players
        .pop()
        .ok_or_else(|| ApiError::server("Assigned player missing after save"))?;
    info!("Player added to team {id}");
    Ok(Json(player))
}

/// List a team's players
#[utoipa::path(
    get,
    path = "/api/teams/{id}/players",
    operation_id = "findAllPlayersByTeamId",
    params(
        ("id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Array of players", body = [Player]),
        (status = 401, description = "Invalid teamId.", body = ErrorResponse),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Teams"
)]
pub async fn find_all_players_by_team_id(
    Extension(teams): Extension<Repository<Team>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Player>>, ApiError> {
    teams
        .get(&id)
        .await?
        .map(|team| Json(team.players))
        .ok_or_else(ApiError::invalid_team_id)
}

/// Delete a team
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    operation_id = "deleteTeamById",
    params(
        ("id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Deleted team document.", body = StatusResponse),
        (status = 401, description = "Invalid teamId.", body = ErrorResponse),
        (status = 500, description = "Server Exception", body = ErrorResponse),
        (status = 501, description = "MongoDB Exception", body = ErrorResponse),
    ),
    tag = "Teams"
)]
pub async fn delete_team_by_id(
    Extension(teams): Extension<Repository<Team>>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    if teams.delete(&id).await?.is_none() {
        return Err(ApiError::invalid_team_id());
    }
    info!("Deleted team {id}");
    Ok(Json(StatusResponse::new("Deleted team document.")))
}
