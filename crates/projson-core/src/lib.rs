//! # projson-core
//!
//! Core library for **ProJSON**, a desktop JSON formatting and validation
//! client. The editor shell (window chrome, menus, the embedded code editor)
//! lives in the host application; this crate owns everything with semantics:
//! the syntax-error locator, the format/minify operations, the editing-surface
//! state that ties them together, and the persisted configuration.
//!
//! ## Quick start
//!
//! ```rust
//! use projson_core::{format, locate, ParseFailure};
//!
//! // Pretty-print with a 2-space indent (the editor's Format action)
//! let pretty = format(r#"{"name":"Alice","age":30}"#).unwrap();
//! assert_eq!(pretty, "{\n  \"name\": \"Alice\",\n  \"age\": 30\n}");
//!
//! // Turn an opaque decoder failure into a line/column pointer
//! let failure = ParseFailure::new("Unexpected token } in JSON at position 7");
//! let err = locate(r#"{"a":1,}"#, &failure).unwrap();
//! assert_eq!((err.line, err.column), (1, 8));
//! assert_eq!(err.message, "Unexpected token }");
//! ```
//!
//! ## Modules
//!
//! - [`locator`] — decode failure → 1-based (line, column, message)
//! - [`format`] — pretty-print / minify passthroughs to the JSON serializer
//! - [`document`] — editing-surface state (`Document`, the two-panel `Workbench`)
//! - [`config`] — theme and hotkey persistence
//! - [`hotkey`] — accelerator string normalization
//! - [`error`] — error types shared across the crate

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod hotkey;
pub mod locator;

pub use config::{AppConfig, Hotkeys, Theme};
pub use document::{Document, Workbench};
pub use error::{ProJsonError, Result};
pub use format::{format, minify};
pub use locator::{locate, JsonError, ParseFailure};
