//! Editing-surface state — the collaborator that owns raw JSON text and
//! consumes the locator.
//!
//! A [`Document`] revalidates on every content change: blank input is never
//! decoded, valid input clears any prior error, and a decode failure runs
//! the locator and stores the result. The validity flag and the located
//! error are tracked separately but kept consistent — an error is only ever
//! present while the document is invalid.
//!
//! [`Workbench`] is the two-panel arrangement of the original client: a raw
//! buffer and its formatted mirror, kept in sync whenever the edited side
//! holds valid JSON.

use crate::format;
use crate::locator::{locate, JsonError, ParseFailure};

/// One editor panel's worth of state: the text buffer, a validity flag, and
/// the located error for the current content, if any.
#[derive(Debug, Clone)]
pub struct Document {
    content: String,
    is_valid: bool,
    error: Option<JsonError>,
}

impl Default for Document {
    /// An empty document is valid: "no content" is not an error state.
    fn default() -> Self {
        Self {
            content: String::new(),
            is_valid: true,
            error: None,
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer and revalidate.
    ///
    /// Blank or whitespace-only content is never handed to the decoder. On
    /// decode failure the previous error is discarded and replaced wholesale
    /// with a freshly located one.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content = text.into();
        if self.content.trim().is_empty() {
            self.is_valid = true;
            self.error = None;
            return;
        }
        match serde_json::from_str::<serde_json::Value>(&self.content) {
            Ok(_) => {
                self.is_valid = true;
                self.error = None;
            }
            Err(err) => {
                self.is_valid = false;
                self.error = locate(&self.content, &ParseFailure::from(err));
            }
        }
    }

    /// Empty the buffer (the panel's Clear action).
    pub fn clear(&mut self) {
        self.set_content(String::new());
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the current content decoded successfully (blank counts as
    /// valid). Tracked independently of [`Document::error`]: an error being
    /// present implies invalid, but a failure the locator could not map
    /// still leaves the document invalid with no error payload.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error(&self) -> Option<&JsonError> {
        self.error.as_ref()
    }

    /// The inline annotation rendered beneath the editing surface
    /// (`Line {line}, Column {column}: {message}`), or `None` when the
    /// content is valid or no structured error was derivable.
    pub fn annotation(&self) -> Option<String> {
        self.error.as_ref().map(JsonError::to_string)
    }
}

/// The two synced editor panels: raw input and its formatted mirror.
///
/// A valid, non-blank edit in either panel replaces the other with the
/// pretty-printed equivalent; invalid edits leave the other panel untouched
/// so the last good state stays visible.
#[derive(Debug, Clone, Default)]
pub struct Workbench {
    raw: Document,
    formatted: Document,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit the raw panel; mirror the pretty-printed form into the
    /// formatted panel when the new content is valid.
    pub fn edit_raw(&mut self, text: impl Into<String>) {
        self.raw.set_content(text);
        if let Some(pretty) = Self::pretty_of(&self.raw) {
            self.formatted.set_content(pretty);
        }
    }

    /// Edit the formatted panel; mirror back into the raw panel when the
    /// new content is valid.
    pub fn edit_formatted(&mut self, text: impl Into<String>) {
        self.formatted.set_content(text);
        if let Some(pretty) = Self::pretty_of(&self.formatted) {
            self.raw.set_content(pretty);
        }
    }

    /// Pretty-print both panels in place (the toolbar Format action).
    /// No-op when the raw panel is invalid or blank.
    pub fn format_raw(&mut self) {
        if let Some(pretty) = Self::pretty_of(&self.raw) {
            self.raw.set_content(pretty.clone());
            self.formatted.set_content(pretty);
        }
    }

    /// Compact the raw panel in place (the toolbar Minify action).
    /// No-op when the raw panel is invalid or blank.
    pub fn minify_raw(&mut self) {
        if !self.raw.is_valid() || self.raw.content().trim().is_empty() {
            return;
        }
        if let Ok(minified) = format::minify(self.raw.content()) {
            self.raw.set_content(minified);
        }
    }

    pub fn raw(&self) -> &Document {
        &self.raw
    }

    pub fn formatted(&self) -> &Document {
        &self.formatted
    }

    /// Pretty form of a panel's content, or `None` when the panel is blank
    /// or invalid (the caller then skips the sync).
    fn pretty_of(doc: &Document) -> Option<String> {
        if !doc.is_valid() || doc.content().trim().is_empty() {
            return None;
        }
        format::format(doc.content()).ok()
    }
}
