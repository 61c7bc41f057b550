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

//! Lenient numeric fields.
//!
//! Amounts, prices, quantities and salaries keep the JSON number they were
//! given, so `4` stays `4` and `2.5` stays `2.5`. Numeric strings such as
//! `"12.5"` are accepted and stored as numbers; an empty string counts as
//! absent.

use serde::{de, Deserialize, Deserializer};
use serde_json::Number;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(Number),
    String(String),
}

/// `deserialize_with` target for `Option<Number>` fields.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(number)) => Ok(Some(number)),
        Some(NumberOrString::String(raw)) => parse(&raw).map_err(de::Error::custom),
    }
}

fn parse(raw: &str) -> Result<Option<Number>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Ok(Some(integer.into()));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Some)
        .ok_or_else(|| format!("`{raw}` is not a number"))
}
