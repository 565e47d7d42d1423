//! Utility functions.
//!
//! This module provides:
//! - Static regex compilation
//! - Log-safe previews of untrusted page content

mod pattern;
pub mod sanitize;

pub use pattern::compile_regex_unsafe;
pub use sanitize::preview;
