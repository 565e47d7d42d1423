//! Configuration constants.
//!
//! This module defines the limits and defaults used by the fetcher and the
//! streaming head parser.

/// Default User-Agent string for HTTP requests.
///
/// Identifies the tool rather than impersonating a browser. Callers can
/// override it per request with their own `User-Agent` header, or globally
/// via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("seo_head/", env!("CARGO_PKG_VERSION"));

// Redirect handling
/// Maximum number of redirect hops to follow
/// A chain of this many redirects ending in a 200 succeeds; one more fails.
pub const MAX_REDIRECT_HOPS: usize = 5;

/// Maximum number of bytes read from a redirect response body before giving up
/// on draining it and dropping the connection instead.
pub const MAX_REDIRECT_DRAIN_BYTES: usize = 64 * 1024;

// Head buffering limits
/// Maximum head section size in bytes (1MB)
/// If no `</head>` shows up within this many bytes, extraction runs over what
/// was captured and the transfer is aborted.
pub const MAX_HEAD_BYTES: usize = 1024 * 1024;

/// Maximum characters of a malformed JSON-LD block to include in a warning
pub const MAX_JSON_LD_PREVIEW_CHARS: usize = 120;

// Network operation timeouts
/// Default per-request timeout in seconds (covers headers and body)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
