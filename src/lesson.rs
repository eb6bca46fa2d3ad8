//! Lesson document parsing — header split and lenient field coercion.
//!
//! A lesson document is a metadata header fenced by `---` lines, followed by
//! the markup body:
//!
//! ```text
//! ---
//! title: The A Row
//! description: The five vowel sounds
//! order: 1
//! ---
//!
//! # The A Row
//! ...
//! ```
//!
//! The body is passed through untouched — rendering it is someone else's
//! job. The header is parsed leniently: each recognized field falls back
//! independently when missing or unusable, so a half-written header never
//! blocks a lesson from displaying.
//!
//! | Field | Fallback |
//! |-------|----------|
//! | `title` | humanized lesson identifier (`lesson-1` → "Lesson 1") |
//! | `description` | empty string |
//! | `order` | 0 |
//!
//! A document with no header at all (or an unclosed fence) is treated as
//! all body.

use crate::naming;
use crate::store::{ContentError, ContentStore};
use serde::Serialize;

/// Metadata extracted from a lesson header, fully defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonMetadata {
    pub title: String,
    pub description: String,
    pub order: i64,
}

/// Read a lesson document and split it into metadata and body.
///
/// `path` is the store-relative file path; `id` is the lesson identifier
/// (file stem), used for the title fallback. Fails with
/// [`ContentError::NotFound`] when the file is absent; header problems
/// never fail the call.
pub fn extract(
    store: &impl ContentStore,
    path: &str,
    id: &str,
) -> Result<(LessonMetadata, String), ContentError> {
    let raw = store.read(path)?;
    let (header, body) = split_header(&raw);
    Ok((parse_metadata(header, id), body.to_string()))
}

/// Split a document into its fenced header and body.
///
/// Returns `(Some(header), body)` when the document opens with a `---` line
/// and a matching closing fence exists; otherwise `(None, whole document)`.
/// The body is everything after the closing fence line, byte-for-byte.
pub fn split_header(content: &str) -> (Option<&str>, &str) {
    let Some(after_open) = content.strip_prefix("---") else {
        return (None, content);
    };
    let Some(open_end) = after_open.find('\n') else {
        return (None, content);
    };
    // The opening fence must be a whole line
    if !after_open[..open_end].trim().is_empty() {
        return (None, content);
    }
    let rest = &after_open[open_end + 1..];

    let mut offset = 0;
    loop {
        let line_end = rest[offset..].find('\n').map(|pos| offset + pos);
        let line = match line_end {
            Some(end) => &rest[offset..end],
            None => &rest[offset..],
        };
        if line.trim_end_matches('\r') == "---" {
            let header = &rest[..offset];
            let body = match line_end {
                Some(end) => &rest[end + 1..],
                None => "",
            };
            return (Some(header), body);
        }
        match line_end {
            Some(end) => offset = end + 1,
            // Unclosed fence: treat the whole document as body
            None => return (None, content),
        }
    }
}

/// Coerce header fields into [`LessonMetadata`], defaulting each
/// independently.
pub fn parse_metadata(header: Option<&str>, id: &str) -> LessonMetadata {
    let mut title = None;
    let mut description = None;
    let mut order = None;

    for line in header.unwrap_or_default().lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = unquote(value.trim());
        match key.trim() {
            "title" if !value.is_empty() => title = Some(value.to_string()),
            "description" => description = Some(value.to_string()),
            "order" => order = value.parse().ok(),
            _ => {}
        }
    }

    LessonMetadata {
        title: title.unwrap_or_else(|| naming::humanize_slug(id)),
        description: description.unwrap_or_default(),
        order: order.unwrap_or(0),
    }
}

/// Strip one pair of matching single or double quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
