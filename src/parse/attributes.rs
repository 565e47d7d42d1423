//! Tag attribute tokenizing.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::MetaAttributes;
use crate::utils::compile_regex_unsafe;

// name = "double" | 'single' | unquoted
const ATTRIBUTE_PATTERN: &str = r#"([\w:-]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^"'\s>]+))"#;

static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ATTRIBUTE_PATTERN, "ATTRIBUTE_RE"));

/// Parses the attribute list of a tag into a name → value map.
///
/// `raw` is the text between the tag name and the closing `>`, e.g.
/// ` name="description" content='Hello'`. Names are lower-cased; values are
/// kept literally (no entity decoding). Attributes without a value, or with
/// an empty one, produce no entry. A repeated name keeps its last value.
pub fn parse_tag_attributes(raw: &str) -> MetaAttributes {
    let mut attrs = MetaAttributes::new();

    for caps in ATTRIBUTE_RE.captures_iter(raw) {
        let Some(name) = caps.get(1) else {
            continue;
        };
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());

        if value.is_empty() {
            continue;
        }

        attrs.insert(name.as_str().to_lowercase(), value.to_string());
    }

    attrs
}
