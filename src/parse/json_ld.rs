//! JSON-LD extraction.
//!
//! Finds `<script type="application/ld+json">` blocks in the captured head,
//! strips `/* ... */` comments and parses the remainder. A block that fails to
//! parse is logged and skipped; it never stops the blocks after it.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::config::MAX_JSON_LD_PREVIEW_CHARS;
use crate::error_handling::StructuredDataError;
use crate::models::MetaAttributes;
use crate::parse::attributes::parse_tag_attributes;
use crate::utils::{compile_regex_unsafe, preview};

const JSON_LD_MIME: &str = "application/ld+json";

const SCRIPT_PATTERN: &str = r"(?is)<script\b([^>]*)>(.*?)</script\s*>";
const BLOCK_COMMENT_PATTERN: &str = r"(?s)/\*.*?\*/";

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SCRIPT_PATTERN, "SCRIPT_RE"));
static BLOCK_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BLOCK_COMMENT_PATTERN, "BLOCK_COMMENT_RE"));

/// Extracts every JSON-LD value from the given head content.
///
/// A block holding a JSON array contributes each of its items; any other
/// value is contributed as-is. Output follows document order.
pub fn collect_json_ld(head: &str) -> Vec<Value> {
    let mut values = Vec::new();

    for caps in SCRIPT_RE.captures_iter(head) {
        let attrs = caps
            .get(1)
            .map(|m| parse_tag_attributes(m.as_str()))
            .unwrap_or_default();
        if !is_json_ld_script(&attrs) {
            continue;
        }

        let body = caps.get(2).map_or("", |m| m.as_str());
        match parse_json_ld_block(body) {
            Ok(Some(Value::Array(items))) => values.extend(items),
            Ok(Some(value)) => values.push(value),
            Ok(None) => {}
            Err(e) => {
                log::warn!(
                    "{}; skipping block: {}",
                    e,
                    preview(body.trim(), MAX_JSON_LD_PREVIEW_CHARS)
                );
            }
        }
    }

    values
}

fn is_json_ld_script(attrs: &MetaAttributes) -> bool {
    attrs
        .get("type")
        .is_some_and(|t| t.eq_ignore_ascii_case(JSON_LD_MIME))
}

/// Parses the text content of one JSON-LD script.
///
/// Returns `Ok(None)` when nothing but comments and whitespace remain.
pub(crate) fn parse_json_ld_block(raw: &str) -> Result<Option<Value>, StructuredDataError> {
    let stripped = BLOCK_COMMENT_RE.replace_all(raw, "");
    let content = stripped.trim();
    if content.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(content)?))
}
