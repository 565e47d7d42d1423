//! Utilities for making untrusted page content safe to log.
//!
//! Removes control characters and truncates long snippets so a hostile or
//! broken page cannot flood the log output.

/// Removes control characters from a string.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) are
/// dropped. Non-ASCII text is kept as-is.
pub fn sanitize_for_log(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Sanitizes and truncates a snippet to at most `max_chars` characters.
///
/// Newlines are collapsed to spaces so the preview stays on one log line.
/// Truncation counts characters, not bytes, so multi-byte text is never split.
pub fn preview(text: &str, max_chars: usize) -> String {
    let sanitized = sanitize_for_log(text).replace(['\n', '\r', '\t'], " ");
    let total = sanitized.chars().count();
    if total <= max_chars {
        return sanitized;
    }
    let truncated: String = sanitized.chars().take(max_chars).collect();
    format!("{}... ({} chars total)", truncated, total)
}
