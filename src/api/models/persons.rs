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
use utoipa::ToSchema;

use crate::entities::{Dependent, Person, Role};

/// Body of a person create.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub dependents: Vec<Dependent>,
    #[schema(example = "1770-12-17")]
    pub birth_date: Option<String>,
}

impl From<PersonRequest> for Person {
    fn from(request: PersonRequest) -> Self {
        Person {
            id: None,
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            roles: request.roles,
            dependents: request.dependents,
            birth_date: request.birth_date,
        }
    }
}
