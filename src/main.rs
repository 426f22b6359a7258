//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mailauth_scan` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Banner output
//!
//! All scanning is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mailauth_scan::initialization::init_logger_with;
use mailauth_scan::{banner, run_scan, Opt, Style};

#[tokio::main]
async fn main() -> Result<()> {
    // Invalid modes are rejected here, before anything is scanned
    let config = Opt::parse().into_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if config.banner {
        print!("{}", banner(&Style::new(config.color)));
    }

    if let Err(e) = run_scan(config).await {
        eprintln!("mailauth_scan error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
