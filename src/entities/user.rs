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

use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// A registered user. `password` holds a bcrypt hash, never the clear text.
///
/// No endpoint returns this type; sign-up and login answer with status
/// messages only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email_address: Vec<String>,
}

impl User {
    /// Wire name of the unique login name.
    pub const USER_NAME_FIELD: &'static str = "userName";
}

impl Entity for User {
    const COLLECTION: &'static str = "users";
    const REQUIRED_FIELDS: &'static [&'static str] = &["userName", "password"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
