//! Error type definitions.
//!
//! This module defines the fatal fetch errors, the recoverable structured-data
//! error, and initialization errors used by the binary.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that abort a head fetch.
///
/// Every variant is fatal to the call that produced it. Parser-level problems
/// (malformed tags, bad JSON-LD, missing `</head>`) never surface here.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The redirect bound was exceeded.
    #[error("Too many redirects (more than {max})")]
    TooManyRedirects {
        /// The bound that was hit
        max: usize,
    },

    /// A 3xx response lacked a usable `Location` header.
    #[error("Redirect with no location header (status {status} from {url})")]
    MissingRedirectLocation {
        /// The redirect status code
        status: u16,
        /// The URL that answered with the redirect
        url: String,
    },

    /// Any status other than 200 or a 3xx redirect.
    #[error("Request failed with status code {0}")]
    UnexpectedStatus(u16),

    /// Connection, DNS, TLS, timeout or protocol failure, surfaced unchanged.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] ReqwestError),

    /// The URL (or a redirect target) could not be parsed.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The offending input
        url: String,
        /// The parser failure
        #[source]
        source: url::ParseError,
    },

    /// The URL uses a scheme other than http or https.
    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("Invalid request header '{0}'")]
    InvalidHeader(String),
}

impl FetchError {
    /// Returns the HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::UnexpectedStatus(code) => Some(*code),
            FetchError::MissingRedirectLocation { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// A JSON-LD block whose content could not be parsed.
///
/// Recovered locally: the collector logs it as a warning and moves on to the
/// next block.
#[derive(Error, Debug)]
pub enum StructuredDataError {
    /// The block is not valid JSON.
    #[error("Failed to parse JSON-LD: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
