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

use axum::extract::FromRequest;

use super::error::ApiError;

/// JSON body extractor whose rejections (bad syntax, wrong field types,
/// missing content type) surface as server exceptions rather than axum's
/// default 4xx plain-text responses.
///
/// Bodies are JSON only. Form-encoded requests are rejected like any other
/// non-JSON content type and answer 500.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
