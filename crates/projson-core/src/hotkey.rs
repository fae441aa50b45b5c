//! Accelerator string normalization.
//!
//! User-recorded hotkeys arrive in loose `cmd+shift+j` form; the host window
//! layer expects `CommandOrControl+Shift+J`. Registration itself is
//! host-process plumbing and happens elsewhere — this module only owns the
//! string format.

/// Accelerator registered when no configuration exists.
pub const DEFAULT_ACCELERATOR: &str = "CommandOrControl+Shift+J";

/// Normalize a loosely formatted hotkey string into the host accelerator
/// convention: `cmd`/`ctrl` → `CommandOrControl`, `shift` → `Shift`,
/// `alt`/`option` → `Alt`, anything else capitalized. Blank input yields
/// [`DEFAULT_ACCELERATOR`].
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return DEFAULT_ACCELERATOR.to_string();
    }
    raw.split('+')
        .map(|key| {
            let key = key.trim().to_ascii_lowercase();
            match key.as_str() {
                "cmd" | "ctrl" => "CommandOrControl".to_string(),
                "shift" => "Shift".to_string(),
                "alt" | "option" => "Alt".to_string(),
                _ => capitalize(&key),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

/// Uppercase the first character, leaving the rest as-is.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
