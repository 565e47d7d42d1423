//! Streaming head parser.
//!
//! [`HeadParser`] accumulates body chunks until it sees the closing head tag
//! (or the stream ends, or the buffer limit is hit), then runs a single
//! extraction pass over the captured text. Anything after `</head>` is never
//! looked at.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::MAX_HEAD_BYTES;
use crate::models::Metadata;
use crate::parse::attributes::parse_tag_attributes;
use crate::parse::classify::apply_known_tag;
use crate::parse::json_ld::collect_json_ld;
use crate::utils::compile_regex_unsafe;

const HEAD_CLOSE_PATTERN: &str = r"(?i)</head\s*>";
const TITLE_PATTERN: &str = r"(?i)<title[^>]*>([^<]*)</title>";
const META_PATTERN: &str = r"(?i)<meta\b([^>]*)>";
const LINK_PATTERN: &str = r"(?i)<link\b([^>]*)>";

static HEAD_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HEAD_CLOSE_PATTERN, "HEAD_CLOSE_RE"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TITLE_PATTERN, "TITLE_RE"));
static META_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(META_PATTERN, "META_RE"));
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(LINK_PATTERN, "LINK_RE"));

/// Lifecycle of a [`HeadParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Collecting chunks, no head boundary seen yet
    Accumulating,
    /// Extraction has run; further input is ignored
    Done,
}

/// What the producer should do after handing a chunk to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Keep sending chunks
    NeedMore,
    /// Metadata is ready; stop the transfer
    Complete,
}

/// Incremental `<head>` parser.
///
/// ```
/// use seo_head::{HeadParser, Progress};
///
/// let mut parser = HeadParser::new();
/// assert_eq!(parser.push(b"<html><head><title>Hi</tit"), Progress::NeedMore);
/// assert_eq!(parser.push(b"le></head><body>"), Progress::Complete);
/// assert_eq!(parser.finish().title.as_deref(), Some("Hi"));
/// ```
#[derive(Debug)]
pub struct HeadParser {
    state: ParserState,
    buffer: String,
    /// Trailing bytes of an incomplete UTF-8 sequence from the last chunk
    pending: Vec<u8>,
    /// Where the next close-tag search starts
    scan_from: usize,
    max_bytes: usize,
    metadata: Metadata,
}

impl Default for HeadParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadParser {
    /// Creates a parser that buffers at most [`MAX_HEAD_BYTES`].
    pub fn new() -> Self {
        Self::with_limit(MAX_HEAD_BYTES)
    }

    /// Creates a parser that gives up waiting for `</head>` after `max_bytes`.
    pub fn with_limit(max_bytes: usize) -> Self {
        Self {
            state: ParserState::Accumulating,
            buffer: String::new(),
            pending: Vec::new(),
            scan_from: 0,
            max_bytes,
            metadata: Metadata::default(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Shorthand for `state() == ParserState::Done`.
    pub fn is_done(&self) -> bool {
        self.state == ParserState::Done
    }

    /// The text captured so far. Once done, this is exactly what extraction saw.
    pub fn captured(&self) -> &str {
        &self.buffer
    }

    /// Feeds one body chunk.
    ///
    /// Returns [`Progress::Complete`] as soon as the head boundary is found or
    /// the buffer limit is exceeded. Chunks pushed after that are ignored.
    pub fn push(&mut self, chunk: &[u8]) -> Progress {
        if self.is_done() {
            return Progress::Complete;
        }

        self.append_decoded(chunk);

        if let Some(end) = self.find_head_end() {
            self.buffer.truncate(end);
            self.complete();
            return Progress::Complete;
        }

        if self.buffer.len() > self.max_bytes {
            log::warn!(
                "No </head> within {} bytes; extracting from the captured prefix",
                self.max_bytes
            );
            let mut cut = self.max_bytes;
            while !self.buffer.is_char_boundary(cut) {
                cut -= 1;
            }
            self.buffer.truncate(cut);
            self.complete();
            return Progress::Complete;
        }

        Progress::NeedMore
    }

    /// Signals the end of the stream and returns the metadata.
    ///
    /// If the head boundary was never seen, extraction runs best-effort over
    /// whatever was captured.
    pub fn finish(mut self) -> Metadata {
        if self.state == ParserState::Accumulating {
            if !self.pending.is_empty() {
                let tail = std::mem::take(&mut self.pending);
                self.buffer.push_str(&String::from_utf8_lossy(&tail));
            }

            if self.buffer.is_empty() {
                self.state = ParserState::Done;
            } else {
                log::debug!(
                    "Stream ended without </head>; parsing {} captured bytes",
                    self.buffer.len()
                );
                self.complete();
            }
        }

        self.metadata
    }

    fn complete(&mut self) {
        self.state = ParserState::Done;
        self.pending.clear();
        self.metadata = extract_metadata(&self.buffer);
    }

    /// Decodes `chunk` as UTF-8 onto the buffer.
    ///
    /// Invalid sequences become U+FFFD. An incomplete sequence at the end of
    /// the chunk is held back until the next one arrives.
    fn append_decoded(&mut self, chunk: &[u8]) {
        let joined;
        let mut rest: &[u8] = if self.pending.is_empty() {
            chunk
        } else {
            self.pending.extend_from_slice(chunk);
            joined = std::mem::take(&mut self.pending);
            &joined
        };

        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    self.buffer.push_str(text);
                    rest = &[];
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    if let Ok(text) = std::str::from_utf8(valid) {
                        self.buffer.push_str(text);
                    }
                    match e.error_len() {
                        Some(len) => {
                            self.buffer.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }

        self.pending = rest.to_vec();
    }

    /// Searches the newly appended text for the head close tag.
    ///
    /// A match can only straddle the previous chunk boundary if it starts at
    /// the last `<` already buffered, so the search resumes there.
    fn find_head_end(&mut self) -> Option<usize> {
        let found = HEAD_CLOSE_RE
            .find_at(&self.buffer, self.scan_from)
            .map(|m| m.end());

        if found.is_none() {
            self.scan_from = self.buffer[self.scan_from..]
                .rfind('<')
                .map_or(self.buffer.len(), |i| self.scan_from + i);
        }

        found
    }
}

/// Parses an already-available document (or head fragment) in one go.
pub fn parse_head(html: &str) -> Metadata {
    let mut parser = HeadParser::new();
    parser.push(html.as_bytes());
    parser.finish()
}

/// Runs the single extraction pass over captured head content.
///
/// Title and canonical take the first match; description, keywords and
/// namespace values are overwritten by every later matching tag.
pub(crate) fn extract_metadata(head: &str) -> Metadata {
    let mut metadata = Metadata::default();

    let title = TITLE_RE
        .captures(head)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    set_field(&mut metadata.title, title);

    let canonical = find_canonical(head);
    set_field(&mut metadata.canonical, canonical.as_deref());

    for caps in META_RE.captures_iter(head) {
        let raw = caps.get(1).map_or("", |m| m.as_str());
        if raw.is_empty() {
            continue;
        }

        // A tag with only boolean attributes still gets an (empty) entry
        let attrs = parse_tag_attributes(raw);
        if apply_known_tag(&mut metadata, &attrs) {
            continue;
        }

        let name = attrs.get("name").map(|n| n.to_lowercase());
        match name.as_deref() {
            Some("description") => {
                set_field(&mut metadata.description, attrs.get("content").map(String::as_str))
            }
            Some("keywords") => {
                set_field(&mut metadata.keywords, attrs.get("content").map(String::as_str))
            }
            _ => metadata.meta.push(attrs),
        }
    }

    metadata.json_ld = collect_json_ld(head);

    metadata
}

fn find_canonical(head: &str) -> Option<String> {
    LINK_RE
        .captures_iter(head)
        .filter_map(|caps| caps.get(1))
        .map(|m| parse_tag_attributes(m.as_str()))
        .find(|attrs| {
            attrs
                .get("rel")
                .is_some_and(|rel| rel.eq_ignore_ascii_case("canonical"))
                && attrs.contains_key("href")
        })
        .and_then(|mut attrs| attrs.remove("href"))
}

// Empty values never overwrite.
fn set_field(field: &mut Option<String>, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *field = Some(value.to_string());
    }
}
