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
// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use web420_server::config::{write_default_config, StorageConfig};
use web420_server::logging::init_logging;
use web420_server::{load_config_file, Web420Server};

#[derive(Parser)]
#[command(name = "web420-server")]
#[command(about = "REST API server for composers, persons, users, customers and teams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nrustc: ",
    env!("WEB420_RUSTC_VERSION"),
    "\nmongodb driver: ",
    env!("WEB420_MONGODB_DRIVER_VERSION"),
))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Override the server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a configuration file without starting the server
    Validate {
        /// Path to the configuration file to validate
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Show resolved configuration with environment variables expanded
        #[arg(long)]
        show_resolved: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { config, port }) => run_server(config, port).await,
        Some(Commands::Validate {
            config,
            show_resolved,
        }) => validate_config(&config, show_resolved),
        None => run_server(cli.config, cli.port).await,
    }
}

/// Load `.env` from the config file's directory, if there is one.
fn load_env_file(config_path: &Path) -> Option<Result<PathBuf, dotenvy::Error>> {
    let env_file = config_path.parent()?.join(".env");
    if !env_file.exists() {
        return None;
    }
    Some(dotenvy::from_path(&env_file).map(|_| env_file))
}

async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    // Must run before the config is read so interpolation can see the values.
    let env_file = load_env_file(&config_path);

    let created_default = !config_path.exists();
    if created_default {
        write_default_config(&config_path)?;
    }

    let config = load_config_file(&config_path)?;
    init_logging(&config.server.log_level)?;

    info!("Starting web420 server");
    debug!("Debug logging is enabled");

    if created_default {
        warn!(
            "Config file '{}' not found. Created a default configuration.",
            config_path.display()
        );
    }
    match env_file {
        Some(Ok(path)) => info!("Loaded environment variables from {}", path.display()),
        Some(Err(e)) => warn!("Failed to load .env file: {e}"),
        None => {}
    }

    info!("Config file: {}", config_path.display());
    let final_port = port_override.unwrap_or(config.server.port);
    info!("Port: {final_port}");
    debug!("Server configuration: {:?}", config.server);

    let server = Web420Server::from_config(
        config,
        final_port,
        Some(config_path.to_string_lossy().to_string()),
    );
    server.run().await
}

/// Validate a configuration file
fn validate_config(config_path: &Path, show_resolved: bool) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    if let Some(Err(e)) = load_env_file(config_path) {
        println!("[WARN] Failed to load .env file: {e}");
    }

    match load_config_file(config_path) {
        Ok(config) => {
            println!("[OK] Configuration file is valid");
            println!();

            println!("Summary:");
            println!("  Storage: {}", config.storage);
            println!("  Writes: {:?}", config.writes);

            if show_resolved {
                println!();
                println!("Resolved server settings:");
                println!("  Host: {}", config.server.host);
                println!("  Port: {}", config.server.port);
                println!("  Log Level: {}", config.server.log_level);
                if let StorageConfig::Mongodb { database, .. } = &config.storage {
                    println!("  Database: {database}");
                }
            }

            Ok(())
        }
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    }
}
