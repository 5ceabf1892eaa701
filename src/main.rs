// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "manual-camera")]
#[command(about = "Resolve a fully-manual camera2 capture configuration from device capabilities")]
#[command(version)]
struct Cli {
    /// Configuration file (default: <config dir>/manual-camera/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve capture settings for a capability snapshot
    Resolve {
        /// Capability snapshot (JSON)
        snapshot: PathBuf,

        /// Print resolved settings and the applied request as JSON
        #[arg(long)]
        json: bool,

        /// Show platform request keys next to display names
        #[arg(short, long)]
        verbose: bool,

        /// Run control, AWB, AF and AE in AUTO (debugging)
        #[arg(long)]
        force_auto: bool,

        /// Override the device API level
        #[arg(long)]
        api_level: Option<u32>,

        /// Override the output format (auto, raw, yuv)
        #[arg(long)]
        output_format: Option<String>,
    },

    /// List the capabilities a snapshot reports
    Inspect {
        /// Capability snapshot (JSON)
        snapshot: PathBuf,
    },

    /// List the capability keys and request parameters this tool understands
    Keys,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=manual_camera=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            snapshot,
            json,
            verbose,
            force_auto,
            api_level,
            output_format,
        } => cli::resolve(
            &snapshot,
            cli.config.as_deref(),
            cli::Overrides {
                force_auto,
                api_level,
                output_format,
            },
            json,
            verbose,
        ),
        Commands::Inspect { snapshot } => cli::inspect(&snapshot),
        Commands::Keys => cli::list_keys(),
    }
}
