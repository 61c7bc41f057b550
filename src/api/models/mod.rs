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

//! Request bodies accepted by the API.
//!
//! Every field is optional at the JSON level. Missing required values are
//! caught when the resulting entity is written, so a body without a
//! `firstName` fails the same way a database validation error would.

pub mod composers;
pub mod customers;
pub mod persons;
pub mod sessions;
pub mod teams;

pub use composers::ComposerRequest;
pub use customers::{CustomerRequest, InvoiceRequest};
pub use persons::PersonRequest;
pub use sessions::{LoginRequest, SignupRequest};
pub use teams::PlayerRequest;
