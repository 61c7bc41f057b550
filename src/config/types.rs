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

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Top-level server configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Web420ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub writes: WriteMode,
}

/// Listener and logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_database() -> String {
    "web420".to_string()
}

/// Where documents are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum StorageConfig {
    /// A MongoDB deployment reachable at `uri`.
    Mongodb {
        uri: String,
        #[serde(default = "default_database")]
        database: String,
    },
    /// Process-local storage that is lost on shutdown.
    Memory,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Mongodb {
            uri: "mongodb://localhost:27017".to_string(),
            database: default_database(),
        }
    }
}

impl fmt::Display for StorageConfig {
    /// Describe the backend without echoing the connection string, which may
    /// carry credentials.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageConfig::Mongodb { database, .. } => write!(f, "mongodb (database '{database}')"),
            StorageConfig::Memory => write!(f, "memory"),
        }
    }
}

/// How appends to embedded lists (invoices, players) are persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// The response is sent after the parent document has been saved.
    #[default]
    Synchronous,
    /// The response is sent immediately and the save runs in the background.
    /// Save failures are only logged.
    Deferred,
}

impl Web420ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow!("Invalid server port: 0 (cannot be 0)"));
        }

        if self.server.host.is_empty() {
            return Err(anyhow!("Invalid server host: cannot be empty"));
        }

        let level = self.server.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(anyhow!(
                "Invalid log level '{}': expected one of {}",
                self.server.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if let StorageConfig::Mongodb { uri, database } = &self.storage {
            if !(uri.starts_with("mongodb://") || uri.starts_with("mongodb+srv://")) {
                return Err(anyhow!(
                    "Invalid MongoDB uri: must start with mongodb:// or mongodb+srv://"
                ));
            }
            if database.is_empty() {
                return Err(anyhow!("Invalid MongoDB database name: cannot be empty"));
            }
        }

        Ok(())
    }
}
