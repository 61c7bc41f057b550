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

//! Stored document types.
//!
//! Each top-level type maps one-to-one onto a collection and implements
//! [`Entity`](crate::store::Entity). Embedded documents (roles, dependents,
//! invoices, line items, players) are owned by value inside their parent and
//! are persisted only by saving the parent.
//!
//! All types use camelCase wire names, with the identifier under `_id`.

pub mod composer;
pub mod customer;
pub(crate) mod numeric;
pub mod person;
pub mod team;
pub mod user;

pub use composer::Composer;
pub use customer::{Customer, Invoice, LineItem};
pub use person::{Dependent, Person, Role};
pub use team::{Player, Team};
pub use user::User;

/// Fill `id` with a freshly generated identifier if it is empty.
pub(crate) fn ensure_id(id: &mut Option<String>, next_id: &mut dyn FnMut() -> String) {
    if id.is_none() {
        *id = Some(next_id());
    }
}
