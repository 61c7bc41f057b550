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

//! Server configuration.
//!
//! Configuration is read from a YAML (or JSON) file. Before parsing, the file
//! text is run through environment variable interpolation:
//! - `${VAR_NAME}` - required variable
//! - `${VAR_NAME:-default}` - variable with a fallback when unset or empty
//!
//! # Configuration File Example
//!
//! ```yaml
//! server:
//!   host: "${HOST:-0.0.0.0}"
//!   port: ${PORT:-3000}
//!   log_level: info
//!
//! storage:
//!   kind: mongodb
//!   uri: "${MONGODB_URI:-mongodb://localhost:27017}"
//!   database: web420
//!
//! writes: synchronous
//! ```

pub mod env_interpolation;
pub mod loader;
pub mod types;

pub use loader::{
    from_json_str, from_yaml_str, load_config_file, save_config_file, write_default_config,
    ConfigError, DEFAULT_CONFIG_TEMPLATE,
};
pub use types::{ServerSettings, StorageConfig, Web420ServerConfig, WriteMode};
