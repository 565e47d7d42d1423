//! Regex compilation utilities.

use regex::Regex;

/// Compiles a regex pattern that must succeed (for compile-time constants).
///
/// This function panics if compilation fails, which is appropriate for static
/// patterns held in `LazyLock`s. A failure here is a programming error, never
/// a property of the input being parsed.
///
/// # Arguments
///
/// * `pattern` - The regex source
/// * `context` - Name of the static being initialized, for the panic message
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}
