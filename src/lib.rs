//! seo_head library: fetch only the `<head>` of an HTML page
//!
//! This library retrieves a remote HTML document over HTTP(S), stops reading
//! as soon as `</head>` has arrived, and extracts SEO metadata from what it
//! captured: title, description, keywords, canonical link, generic meta tags,
//! App Links / Open Graph / Twitter Card properties, and JSON-LD blocks.
//!
//! # Example
//!
//! ```no_run
//! use seo_head::fetch_head;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metadata = fetch_head("https://example.com", None).await?;
//! println!("title: {:?}", metadata.title);
//! println!("og: {:?}", metadata.og);
//! # Ok(())
//! # }
//! ```
//!
//! Already have the bytes? Use [`HeadParser`] (incremental) or [`parse_head`]
//! directly; neither needs a runtime.
//!
//! # Requirements
//!
//! Fetching requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod parse;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, InitializationError, StructuredDataError};
pub use fetch::{fetch_head, FetchOptions, HeadFetcher};
pub use models::{MetaAttributes, Metadata, NamespaceValues};
pub use parse::{parse_head, HeadParser, ParserState, Progress};
