//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_head` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the extracted metadata as JSON
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_head::initialization::init_logger_with;
use seo_head::{Config, HeadFetcher, InitializationError};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let fetcher = HeadFetcher::new(&config)
        .map_err(InitializationError::from)
        .context("Failed to initialize HTTP client")?;

    let headers = config.header_map();
    let result = fetcher
        .fetch(&config.url, Some(&headers))
        .await
        .with_context(|| format!("Failed to fetch head of {}", config.url));

    match result {
        Ok(metadata) => {
            let json = if config.compact {
                serde_json::to_string(&metadata)
            } else {
                serde_json::to_string_pretty(&metadata)
            }
            .context("Failed to serialize metadata")?;
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_head error: {:#}", e);
            process::exit(1);
        }
    }
}
