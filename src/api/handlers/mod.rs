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

//! Request handlers, one module per resource group.
//!
//! Each handler receives the repository for its collection through an
//! `Extension` layer and performs at most one lookup and one write.

pub mod composers;
pub mod customers;
pub mod persons;
pub mod sessions;
pub mod system;
pub mod teams;

use log::{debug, error, warn};

use super::error::ApiError;
use crate::config::WriteMode;
use crate::store::{Entity, Repository};

/// Save a parent document after an item was appended to one of its embedded
/// lists, returning the parent as it will be stored.
///
/// Embedded identifiers are assigned before the save so the response carries
/// them in either write mode. In [`WriteMode::Deferred`] the save runs on a
/// background task and its outcome is only logged. `missing` builds the error
/// for a parent that disappeared before a synchronous save.
pub(crate) async fn persist_parent<T>(
    repo: &Repository<T>,
    mut parent: T,
    write_mode: WriteMode,
    missing: fn() -> ApiError,
) -> Result<T, ApiError>
where
    T: Entity + Clone,
{
    let store = repo.store().clone();
    parent.assign_embedded_ids(&mut || store.generate_id());

    match write_mode {
        WriteMode::Synchronous => {
            if repo.save(&mut parent).await? {
                Ok(parent)
            } else {
                Err(missing())
            }
        }
        WriteMode::Deferred => {
            let repo = repo.clone();
            let mut pending = parent.clone();
            tokio::spawn(async move {
                match repo.save(&mut pending).await {
                    Ok(true) => debug!("Deferred save to '{}' completed", T::COLLECTION),
                    Ok(false) => warn!(
                        "Deferred save to '{}' matched no document; the append was lost",
                        T::COLLECTION
                    ),
                    Err(e) => error!("Deferred save to '{}' failed: {e}", T::COLLECTION),
                }
            });
            Ok(parent)
        }
    }
}
