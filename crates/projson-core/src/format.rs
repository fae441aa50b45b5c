//! Format and minify passthroughs to the JSON serializer.
//!
//! These carry no original logic: parsing and serialization are entirely
//! serde_json's, the same way the original client delegated everything to
//! `JSON.parse`/`JSON.stringify`. Pretty output uses a 2-space indent, the
//! shape the editor's Format action produces. Key order is preserved
//! (`preserve_order` feature), so formatting never reorders fields.

use crate::error::Result;
use serde_json::Value;

/// Pretty-print a JSON string with 2-space indentation.
///
/// Returns [`crate::ProJsonError::Parse`] if the input is not valid JSON.
pub fn format(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Compact a JSON string to its minimal single-line form.
///
/// Returns [`crate::ProJsonError::Parse`] if the input is not valid JSON.
pub fn minify(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&value)?)
}
