// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "capture-flow")]
#[command(about = "Capture-and-review camera workflow")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a photo and save it
    Photo {
        /// Camera facing to use (front or back)
        #[arg(short, long)]
        facing: Option<String>,

        /// Output path (default: ~/Pictures/CaptureFlow/IMG_TIMESTAMP.jpg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run an interactive capture session
    Session {
        /// Output directory (default: ~/Pictures/CaptureFlow)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=capture_flow=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Photo { facing, output }) => cli::take_photo(facing, output),
        Some(Commands::Session { output }) => cli::run_session(output),
        None => cli::run_session(None),
    }
}
