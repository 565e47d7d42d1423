//! Head parsing and metadata extraction.
//!
//! This module turns the streamed bytes of an HTML document into [`Metadata`]:
//! - Title and canonical link
//! - Description, keywords and other meta tags
//! - Namespaced meta tags (App Links, Open Graph, Twitter Cards)
//! - Structured data (JSON-LD)
//!
//! Parsing is regex-based and deliberately shallow: no DOM is built and no
//! entities are decoded. Only the text up to `</head>` is ever examined.
//!
//! [`Metadata`]: crate::Metadata

mod attributes;
mod classify;
mod head;
mod json_ld;

// Re-export public API
pub use attributes::parse_tag_attributes;
pub use classify::{apply_known_tag, classify, Namespace, NamespaceRule, NAMESPACE_RULES};
pub use head::{parse_head, HeadParser, ParserState, Progress};
pub use json_ld::collect_json_ld;
