//! Namespaced meta tag classification.
//!
//! Social-card style meta tags (`og:*`, `twitter:*`, `al:*`) are grouped into
//! their own maps instead of the generic `meta` list. Which attribute carries
//! the prefix differs per family, so the routing is driven by a static rule
//! table checked in priority order.

use std::fmt;

use crate::models::{MetaAttributes, Metadata, NamespaceValues};

/// A known meta tag namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// App Links
    Al,
    /// Open Graph
    Og,
    /// Twitter Cards
    Twitter,
}

impl Namespace {
    /// The prefix used in attribute values, without the trailing colon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Al => "al",
            Namespace::Og => "og",
            Namespace::Twitter => "twitter",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routes meta tags whose `key` attribute starts with `"<namespace>:"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceRule {
    /// Namespace the tag is filed under
    pub namespace: Namespace,
    /// Attribute whose value carries the prefix
    pub key: &'static str,
}

/// Classification rules, in priority order. The first match wins.
pub const NAMESPACE_RULES: &[NamespaceRule] = &[
    NamespaceRule {
        namespace: Namespace::Al,
        key: "property",
    },
    NamespaceRule {
        namespace: Namespace::Og,
        key: "property",
    },
    NamespaceRule {
        namespace: Namespace::Twitter,
        key: "name",
    },
];

/// Finds the first rule that claims a tag.
///
/// Returns the namespace and the sub-key (the attribute value after
/// `"<namespace>:"`). Prefix comparison is case-sensitive.
pub fn classify<'a>(
    attrs: &'a MetaAttributes,
    rules: &[NamespaceRule],
) -> Option<(Namespace, &'a str)> {
    rules.iter().find_map(|rule| {
        let value = attrs.get(rule.key)?;
        let sub_key = value
            .strip_prefix(rule.namespace.as_str())?
            .strip_prefix(':')?;
        Some((rule.namespace, sub_key))
    })
}

/// Records a meta tag under its namespace, if it belongs to one.
///
/// Stores `sub-key → content` (content may be missing) and returns `true`
/// when the tag was claimed. A repeated sub-key keeps the last value.
pub fn apply_known_tag(metadata: &mut Metadata, attrs: &MetaAttributes) -> bool {
    let Some((namespace, sub_key)) = classify(attrs, NAMESPACE_RULES) else {
        return false;
    };

    namespace_values_mut(metadata, namespace)
        .insert(sub_key.to_string(), attrs.get("content").cloned());
    true
}

fn namespace_values_mut(metadata: &mut Metadata, namespace: Namespace) -> &mut NamespaceValues {
    match namespace {
        Namespace::Al => &mut metadata.al,
        Namespace::Og => &mut metadata.og,
        Namespace::Twitter => &mut metadata.twitter,
    }
}
