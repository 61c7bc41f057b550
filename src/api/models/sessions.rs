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

use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

/// Body of a signup.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[schema(example = "jdoe")]
    pub user_name: Option<String>,
    pub password: Option<String>,
    /// A single address or a list of addresses
    #[serde(default, deserialize_with = "one_or_many")]
    pub email_address: Vec<String>,
}

/// Body of a login.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "jdoe")]
    pub user_name: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(address)) => vec![address],
        Some(OneOrMany::Many(addresses)) => addresses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_address_accepts_single_string() {
        let request: SignupRequest = serde_json::from_value(json!({
            "userName": "jdoe",
            "password": "s3cret",
            "emailAddress": "jdoe@example.com"
        }))
        .unwrap();
        assert_eq!(request.email_address, vec!["jdoe@example.com"]);
    }

    #[test]
    fn test_email_address_accepts_list_null_or_absence() {
        let request: SignupRequest =
            serde_json::from_value(json!({"emailAddress": ["a@example.com", "b@example.com"]}))
                .unwrap();
        assert_eq!(request.email_address.len(), 2);

        let request: SignupRequest = serde_json::from_value(json!({"emailAddress": null})).unwrap();
        assert!(request.email_address.is_empty());

        let request: SignupRequest = serde_json::from_value(json!({"userName": "jdoe"})).unwrap();
        assert!(request.email_address.is_empty());
        assert!(request.password.is_none());
    }
}
