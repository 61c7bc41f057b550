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

use serde::Deserialize;
use serde_json::Number;
use utoipa::ToSchema;

use crate::entities::{numeric, Player};

/// A player to add to a team roster.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "numeric::deserialize")]
    #[schema(value_type = Option<f64>, example = 52000)]
    pub salary: Option<Number>,
}

impl From<PlayerRequest> for Player {
    fn from(request: PlayerRequest) -> Self {
        Player {
            id: None,
            first_name: request.first_name,
            last_name: request.last_name,
            salary: request.salary,
        }
    }
}
