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

use crate::entities::Composer;

/// Body of a composer create or update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComposerRequest {
    #[schema(example = "Ludwig")]
    pub first_name: Option<String>,
    #[schema(example = "van Beethoven")]
    pub last_name: Option<String>,
}

impl ComposerRequest {
    /// Overwrite the names of an existing composer. Absent names become empty
    /// and are rejected on save.
    pub fn apply_to(self, composer: &mut Composer) {
        composer.first_name = self.first_name.unwrap_or_default();
        composer.last_name = self.last_name.unwrap_or_default();
    }
}

impl From<ComposerRequest> for Composer {
    fn from(request: ComposerRequest) -> Self {
        Composer::new(
            request.first_name.unwrap_or_default(),
            request.last_name.unwrap_or_default(),
        )
    }
}
