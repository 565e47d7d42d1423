//! HTTP header value constants.

/// `Accept` value sent with every request.
///
/// Applied after caller-supplied headers, so it cannot be overridden.
pub const ACCEPT_HTML: &str = "text/html";

/// Separator between name and value in `-H "Name: Value"` arguments.
pub const HEADER_ARG_SEPARATOR: char = ':';
