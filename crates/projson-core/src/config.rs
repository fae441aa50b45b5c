//! Application configuration — theme and hotkey persistence.
//!
//! Stored as pretty-printed JSON in a `config.json` under the host's user
//! data directory. Loading is forgiving: a missing or corrupt file falls
//! back to defaults rather than failing, so a bad config can never keep the
//! client from starting.

use crate::error::Result;
use crate::hotkey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Editor color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip between light and dark.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Configurable accelerators, keyed the way the persisted config file is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkeys {
    /// Global show/hide accelerator.
    #[serde(rename = "quickOpen")]
    pub quick_open: String,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            quick_open: hotkey::DEFAULT_ACCELERATOR.to_string(),
        }
    }
}

/// Persisted application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub hotkeys: Hotkeys,
}

impl AppConfig {
    /// Load from `path`, falling back to defaults when the file is missing
    /// or does not parse.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write as pretty-printed JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
