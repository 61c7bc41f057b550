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
//! Loading and saving configuration files.
//!
//! Every loader runs the raw text through [`env_interpolation`] before it is
//! parsed, so any value may reference the environment.

use super::env_interpolation;
use super::types::Web420ServerConfig;
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Written when the server is started with a config path that does not exist.
/// `PORT`, `HOST`, `LOG_LEVEL`, `MONGODB_URI` and `MONGODB_DATABASE` override
/// the defaults at load time.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# web420-server configuration
server:
  host: "${HOST:-0.0.0.0}"
  port: ${PORT:-3000}
  log_level: "${LOG_LEVEL:-info}"

storage:
  kind: mongodb
  uri: "${MONGODB_URI:-mongodb://localhost:27017}"
  database: "${MONGODB_DATABASE:-web420}"

# synchronous: respond after embedded appends are saved
# deferred: respond immediately and save in the background
writes: synchronous
"#;

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] env_interpolation::InterpolationError),

    #[error("Failed to parse config file '{path}': YAML error: {yaml_err}, JSON error: {json_err}")]
    ParseError {
        path: String,
        yaml_err: String,
        json_err: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(#[from] anyhow::Error),
}

/// Interpolate environment variables in `s`, then deserialize it as YAML.
pub fn from_yaml_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_yaml::from_str(&interpolated)?)
}

/// Interpolate environment variables in `s`, then deserialize it as JSON.
pub fn from_json_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_json::from_str(&interpolated)?)
}

/// Load and validate the server configuration.
///
/// The file is parsed as YAML first; if that fails it is retried as JSON and
/// both parser errors are reported when neither succeeds.
///
/// ```no_run
/// use web420_server::config::load_config_file;
///
/// let config = load_config_file("config/server.yaml").unwrap();
/// println!("Listening on {}:{}", config.server.host, config.server.port);
/// ```
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<Web420ServerConfig, ConfigError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;

    let config = match from_yaml_str::<Web420ServerConfig>(&content) {
        Ok(config) => config,
        Err(err @ ConfigError::InterpolationError(_)) => return Err(err),
        Err(yaml_err) => match from_json_str::<Web420ServerConfig>(&content) {
            Ok(config) => config,
            Err(json_err) => {
                return Err(ConfigError::ParseError {
                    path: path_ref.display().to_string(),
                    yaml_err: yaml_err.to_string(),
                    json_err: json_err.to_string(),
                });
            }
        },
    };

    config.validate()?;
    Ok(config)
}

/// Save a configuration as YAML. Interpolated values are written out as-is;
/// `${...}` references from the original file are not preserved.
pub fn save_config_file<P: AsRef<Path>>(
    config: &Web420ServerConfig,
    path: P,
) -> Result<(), ConfigError> {
    let content = serde_yaml::to_string(config)?;
    Ok(fs::write(path, content)?)
}

/// Write [`DEFAULT_CONFIG_TEMPLATE`] to `path`, creating parent directories.
pub fn write_default_config<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    let path_ref = path.as_ref();
    if let Some(parent) = path_ref.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path_ref, DEFAULT_CONFIG_TEMPLATE)?;
    info!("Wrote default configuration to {}", path_ref.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StorageConfig, WriteMode};
    use assert_matches::assert_matches;
    use serial_test::serial;
    use std::env;
    use tempfile::{NamedTempFile, TempDir};

    fn write_temp(content: &str) -> NamedTempFile {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), content).unwrap();
        temp_file
    }

    #[test]
    #[serial]
    fn test_from_yaml_str_interpolates() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        struct Listener {
            host: String,
            port: u16,
        }

        env::set_var("WEB420_TEST_HOST", "127.0.0.1");
        let listener: Listener =
            from_yaml_str("host: ${WEB420_TEST_HOST}\nport: ${WEB420_TEST_UNSET_PORT:-4100}")
                .unwrap();
        env::remove_var("WEB420_TEST_HOST");

        assert_eq!(
            listener,
            Listener {
                host: "127.0.0.1".to_string(),
                port: 4100
            }
        );
    }

    #[test]
    #[serial]
    fn test_from_json_str_interpolates() {
        env::set_var("WEB420_TEST_DB", "web420_json");
        let config: Web420ServerConfig = from_json_str(
            r#"{"storage": {"kind": "mongodb", "uri": "mongodb://db:27017", "database": "${WEB420_TEST_DB}"}}"#,
        )
        .unwrap();
        env::remove_var("WEB420_TEST_DB");

        assert_eq!(
            config.storage,
            StorageConfig::Mongodb {
                uri: "mongodb://db:27017".to_string(),
                database: "web420_json".to_string(),
            }
        );
    }

    #[test]
    fn test_load_full_yaml_config() {
        let temp_file = write_temp(
            r#"
server:
  host: 127.0.0.1
  port: 4000
  log_level: debug
storage:
  kind: memory
writes: deferred
"#,
        );

        let config = load_config_file(temp_file.path()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.log_level, "debug");
        assert_eq!(config.storage, StorageConfig::Memory);
        assert_eq!(config.writes, WriteMode::Deferred);
    }

    #[test]
    fn test_load_empty_sections_use_defaults() {
        let temp_file = write_temp("storage:\n  kind: memory\n");

        let config = load_config_file(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.writes, WriteMode::Synchronous);
    }

    #[test]
    fn test_load_json_config() {
        let temp_file = write_temp(r#"{"server": {"port": 4321}, "storage": {"kind": "memory"}}"#);

        let config = load_config_file(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 4321);
    }

    #[test]
    #[serial]
    fn test_load_missing_required_var() {
        env::remove_var("WEB420_TEST_REQUIRED_URI");
        let temp_file = write_temp(
            "storage:\n  kind: mongodb\n  uri: ${WEB420_TEST_REQUIRED_URI}\n",
        );

        let result = load_config_file(temp_file.path());
        assert_matches!(result, Err(ConfigError::InterpolationError(_)));
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let temp_file = write_temp("server:\n  port: 3000\n  colour: blue\n");

        let result = load_config_file(temp_file.path());
        assert_matches!(result, Err(ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_load_runs_validation() {
        let temp_file = write_temp("server:\n  port: 3000\n  log_level: chatty\n");

        let result = load_config_file(temp_file.path());
        assert_matches!(result, Err(ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_save_and_load_config_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let mut config = Web420ServerConfig::default();
        config.server.host = "localhost".to_string();
        config.server.port = 9090;
        config.writes = WriteMode::Deferred;

        save_config_file(&config, temp_file.path()).unwrap();
        let loaded = load_config_file(temp_file.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    #[serial]
    fn test_default_template_honours_port_variable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("server.yaml");
        write_default_config(&path).unwrap();

        env::remove_var("PORT");
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.writes, WriteMode::Synchronous);

        env::set_var("PORT", "8420");
        let config = load_config_file(&path).unwrap();
        env::remove_var("PORT");
        assert_eq!(config.server.port, 8420);
    }
}
