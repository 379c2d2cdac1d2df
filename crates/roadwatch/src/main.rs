// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Roadwatch - damage reporting for municipal roads.
//!
//! This is the binary entry point for the Roadwatch service.

mod serve;
mod shutdown;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use roadwatch_config::{ConfigError, RoadwatchConfig};

/// Roadwatch - damage reporting for municipal roads.
#[derive(Parser, Debug)]
#[command(name = "roadwatch", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Start the HTTP server (the default).
    Serve,
    /// Load and validate the configuration, then exit.
    CheckConfig,
}

fn load_config(path: Option<&Path>) -> Result<RoadwatchConfig, Vec<ConfigError>> {
    match path {
        Some(path) => roadwatch_config::load_and_validate_path(path),
        None => roadwatch_config::load_and_validate(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            roadwatch_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Commands::CheckConfig => {
            println!(
                "roadwatch: config OK (environment={}, bind={}, api_keys={}, debug_endpoint={})",
                config.server.environment,
                config.server.bind_address(),
                config.api_keys.len(),
                config.server.debug_endpoint_enabled(),
            );
        }
    }
}
