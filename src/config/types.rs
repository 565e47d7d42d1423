//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::collections::HashMap;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_HEAD_BYTES, MAX_REDIRECT_HOPS,
};
use crate::config::headers::HEADER_ARG_SEPARATOR;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Fetch configuration, shared by the library and the CLI.
///
/// # Examples
///
/// ```no_run
/// use seo_head::Config;
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     max_redirects: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seo_head",
    about = "Fetches the <head> of an HTML page and prints its SEO metadata as JSON"
)]
pub struct Config {
    /// URL to fetch (http or https)
    pub url: String,

    /// Extra request header, as "Name: Value" (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header_arg)]
    pub headers: Vec<(String, String)>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Default HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum number of redirect hops to follow
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// Maximum bytes to buffer while looking for </head>
    #[arg(long, default_value_t = MAX_HEAD_BYTES)]
    pub max_head_bytes: usize,

    /// Print single-line JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,
}

impl Config {
    /// Returns the extra request headers as a map (later duplicates win).
    pub fn header_map(&self) -> HashMap<String, String> {
        self.headers.iter().cloned().collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            headers: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: MAX_REDIRECT_HOPS,
            max_head_bytes: MAX_HEAD_BYTES,
            compact: false,
        }
    }
}

/// Parses a `Name: Value` header argument.
fn parse_header_arg(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(HEADER_ARG_SEPARATOR)
        .ok_or_else(|| format!("expected \"Name: Value\", got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing header name in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
