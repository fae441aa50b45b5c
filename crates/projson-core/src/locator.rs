//! JSON syntax-error locator — converts an opaque decoder failure plus the
//! offending source text into a 1-based (line, column, message) triple.
//!
//! Decoders disagree about how much position information they expose.
//! serde_json reports a structured line/column. V8-style decoders bury a
//! 0-based offset inside the error text (`Unexpected token } in JSON at
//! position 7`). SpiderMonkey-style decoders report nothing machine-readable
//! at all. [`locate`] accepts all three and degrades gracefully:
//!
//! - structured line/column → used directly
//! - `position <digits>` in the message → offset converted by counting
//!   newlines in the source prefix up to that offset
//! - neither → fallback pointer at line 1, column 1, message untouched
//!
//! # Key design decisions
//!
//! - **Message scraping is isolated**: the error-string format is an
//!   undocumented, per-decoder convention, so the detection lives in one
//!   narrow function (`offset_in_message`) that can be swapped per decoder
//!   without touching call sites.
//! - **Code-unit columns**: columns count code units within the line, not
//!   grapheme clusters, so multi-byte characters can make the column diverge
//!   from the visual position. Accepted approximation, not corrected.
//! - **`\n` only**: a `\r` before a newline counts toward the prior line's
//!   width rather than being stripped.
//! - **Fail soft**: an offset the source cannot be split at yields `None`,
//!   never a panic or a propagated error.

use std::fmt;

/// A located decode failure: 1-based line and column plus a cleaned,
/// user-facing message. Rebuilt wholesale on every failed validation attempt
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonError {
    /// 1-based line number containing the failure point.
    pub line: usize,
    /// 1-based column: code-unit offset within the line, plus one.
    pub column: usize,
    /// Decoder message with position/redundant framing stripped.
    pub message: String,
}

impl fmt::Display for JsonError {
    /// The inline annotation shown beneath the editing surface.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}, Column {}: {}", self.line, self.column, self.message)
    }
}

/// An opaque parse failure handed to [`locate`]: the decoder's message and,
/// when the decoder supplies one, a structured 1-based line/column. No
/// structured position is guaranteed — message formats vary by decoder and
/// version.
#[derive(Debug, Clone)]
pub struct ParseFailure {
    message: String,
    line_col: Option<(usize, usize)>,
}

impl ParseFailure {
    /// A failure known only by its message text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line_col: None,
        }
    }

    /// The raw decoder message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for ParseFailure {
    /// serde_json exposes its position structurally; keep it so [`locate`]
    /// does not have to scrape it back out of the message text. A reported
    /// line or column of zero (I/O errors, empty input) counts as absent.
    fn from(err: serde_json::Error) -> Self {
        let line_col = (err.line() >= 1 && err.column() >= 1).then(|| (err.line(), err.column()));
        Self {
            message: err.to_string(),
            line_col,
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Locate a decode failure within `source`.
///
/// `source` must be the exact string that was handed to the decoder. Callers
/// skip invocation for blank input — "no content" is not an error state.
///
/// Returns `None` only when the reported offset cannot be mapped onto
/// `source` at all (it lands inside a multi-byte character); callers treat
/// that as "no structured position available" and fall back to the raw
/// message or nothing. Pure and O(len of source): one pass over the prefix.
pub fn locate(source: &str, failure: &ParseFailure) -> Option<JsonError> {
    // Structured path: the decoder already did the line/column bookkeeping.
    if let Some((line, column)) = failure.line_col {
        return Some(JsonError {
            line,
            column,
            message: strip_line_col_suffix(&failure.message),
        });
    }

    let Some(offset) = offset_in_message(&failure.message) else {
        // No locatable offset: generic pointer at the start of the document,
        // message passed through unmodified.
        return Some(JsonError {
            line: 1,
            column: 1,
            message: failure.message.clone(),
        });
    };

    // An offset equal to source.len() is valid (failure at end of input);
    // past-the-end offsets clamp to it, matching the slice semantics of the
    // decoders that produce these messages.
    let offset = offset.min(source.len());
    // Fail soft when the offset splits a multi-byte character.
    let prefix = source.get(..offset)?;

    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let column = prefix.len() - line_start + 1;

    Some(JsonError {
        line,
        column,
        message: clean_message(&failure.message),
    })
}

/// Extract a 0-based code-unit offset from a `position <digits>` token in
/// the decoder message. This is the single swap point for per-decoder
/// message conventions.
///
/// Returns `None` when no such token exists or the digits overflow `usize`
/// (the caller then takes the fallback path).
fn offset_in_message(message: &str) -> Option<usize> {
    let mut rest = message;
    while let Some(pos) = rest.find("position") {
        let after = &rest[pos + "position".len()..];
        if let Some(digits) = after.strip_prefix(' ') {
            let len = digits.bytes().take_while(u8::is_ascii_digit).count();
            if len > 0 {
                return digits[..len].parse().ok();
            }
        }
        rest = after;
    }
    None
}

/// Strip decoder framing from a message that carried a `position` offset: a
/// leading `JSON.parse: ` prefix and the `in JSON at position <digits>`
/// clause. An `Unexpected token ` opening survives verbatim; only
/// surrounding whitespace is normalized.
fn clean_message(message: &str) -> String {
    let msg = message.strip_prefix("JSON.parse: ").unwrap_or(message);
    match msg.find("in JSON at position") {
        Some(start) => {
            let after = &msg[start + "in JSON at position".len()..];
            let after = after.trim_start_matches(' ');
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            let head = msg[..start].trim_end();
            let tail = after[digits..].trim();
            match (head.is_empty(), tail.is_empty()) {
                (true, _) => tail.to_string(),
                (_, true) => head.to_string(),
                _ => format!("{head} {tail}"),
            }
        }
        None => msg.trim().to_string(),
    }
}

/// serde_json frames its messages as `<reason> at line N column M`; the
/// position is already surfaced structurally, so drop the redundant suffix.
fn strip_line_col_suffix(message: &str) -> String {
    if let Some(pos) = message.rfind(" at line ") {
        if is_line_col_tail(&message[pos + " at line ".len()..]) {
            return message[..pos].to_string();
        }
    }
    message.to_string()
}

/// True when `tail` is exactly `<digits> column <digits>`.
fn is_line_col_tail(tail: &str) -> bool {
    let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    match tail[digits..].strip_prefix(" column ") {
        Some(rest) => !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
