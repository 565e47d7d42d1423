//! Error handling.
//!
//! This module provides the error types used throughout the crate:
//! - **Fatal**: [`FetchError`] terminates a fetch (redirect bound, bad status,
//!   transport failures, invalid input)
//! - **Recoverable**: [`StructuredDataError`] is logged and skipped during
//!   extraction
//! - **Setup**: [`InitializationError`] covers logger and client construction

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, StructuredDataError};
