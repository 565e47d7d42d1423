//! Output data model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attributes of a single tag, keyed by lower-cased attribute name.
pub type MetaAttributes = BTreeMap<String, String>;

/// Values grouped under a known meta namespace (`og`, `twitter`, `al`).
///
/// Keys are the part after the `"<namespace>:"` prefix. The value is the tag's
/// `content` attribute, which may be missing.
pub type NamespaceValues = BTreeMap<String, Option<String>>;

/// Metadata extracted from a document's `<head>`.
///
/// Created empty when a parse starts, filled by a single extraction pass, and
/// handed to the caller by value once the parse completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Text of the first `<title>` element
    pub title: Option<String>,
    /// `content` of the last `<meta name="description">`
    pub description: Option<String>,
    /// `content` of the last `<meta name="keywords">`
    pub keywords: Option<String>,
    /// `href` of the first `<link rel="canonical">`
    pub canonical: Option<String>,
    /// Every other meta tag, in document order
    pub meta: Vec<MetaAttributes>,
    /// App Links (`al:*`, keyed by `property`)
    pub al: NamespaceValues,
    /// Open Graph (`og:*`, keyed by `property`)
    pub og: NamespaceValues,
    /// Twitter Cards (`twitter:*`, keyed by `name`)
    pub twitter: NamespaceValues,
    /// Parsed JSON-LD values, arrays flattened one level
    #[serde(rename = "jsonLd")]
    pub json_ld: Vec<serde_json::Value>,
}

impl Metadata {
    /// Returns `true` if nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        *self == Metadata::default()
    }
}
