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

//! Log output.
//!
//! The crate logs through the `log` facade. At startup a tracing-subscriber
//! formatter is installed which also captures `log` records, including those
//! emitted by the MongoDB driver and axum.

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global log subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when it is set. Fails if
/// a subscriber has already been installed.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), default_level)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

fn build_filter(from_env: Option<&str>, default_level: &str) -> Result<EnvFilter> {
    let directives = match from_env {
        Some(directives) if !directives.trim().is_empty() => directives.to_string(),
        _ => default_level.to_lowercase(),
    };
    EnvFilter::try_new(&directives).map_err(|e| anyhow!("Invalid log filter '{directives}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_used_without_env() {
        let filter = build_filter(None, "DEBUG").unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_env_directives_take_precedence() {
        let filter = build_filter(Some("web420_server=trace"), "info").unwrap();
        assert_eq!(filter.to_string(), "web420_server=trace");
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        let filter = build_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }
}
