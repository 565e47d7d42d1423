//! HTTP client initialization.
//!
//! This module provides the function that builds the HTTP client used for
//! head fetches.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the HTTP client used for head fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirects disabled (the fetch loop follows them itself to enforce its bound)
/// - Request timeout from the config, covering headers and body
/// - TCP connect timeout of `TCP_CONNECT_TIMEOUT_SECS`
/// - Rustls TLS backend (no native TLS)
///
/// No default `User-Agent` is set on the client; it is sent per request so
/// callers can override it.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .build()
}
