use projson_core::{hotkey, AppConfig, Theme};
use std::path::Path;

// ============================================================================
// Theme
// ============================================================================

#[test]
fn theme_defaults_to_light_and_toggles() {
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(Theme::Light.toggle(), Theme::Dark);
    assert_eq!(Theme::Dark.toggle(), Theme::Light);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
    let back: Theme = serde_json::from_str(r#""light""#).unwrap();
    assert_eq!(back, Theme::Light);
}

// ============================================================================
// AppConfig persistence
// ============================================================================

#[test]
fn load_missing_file_falls_back_to_defaults() {
    let config = AppConfig::load(Path::new("/tmp/projson-test-does-not-exist/config.json"));
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.hotkeys.quick_open, hotkey::DEFAULT_ACCELERATOR);
}

#[test]
fn load_corrupt_file_falls_back_to_defaults() {
    let path = "/tmp/projson-test-corrupt-config.json";
    std::fs::write(path, "{ not json at all").unwrap();

    let config = AppConfig::load(Path::new(path));
    assert_eq!(config, AppConfig::default());

    let _ = std::fs::remove_file(path);
}

#[test]
fn save_then_load_round_trips() {
    let path = Path::new("/tmp/projson-test-config-roundtrip/nested/config.json");
    let _ = std::fs::remove_dir_all("/tmp/projson-test-config-roundtrip");

    let config = AppConfig {
        theme: Theme::Dark,
        hotkeys: projson_core::Hotkeys {
            quick_open: "CommandOrControl+Alt+P".to_string(),
        },
    };
    config.save(path).unwrap();

    // Parent directories were created, content is pretty JSON with the
    // original config file's key names.
    let on_disk = std::fs::read_to_string(path).unwrap();
    assert!(on_disk.contains("\"quickOpen\""));
    assert!(on_disk.contains("\"dark\""));

    assert_eq!(AppConfig::load(path), config);

    let _ = std::fs::remove_dir_all("/tmp/projson-test-config-roundtrip");
}

#[test]
fn partial_config_fills_missing_fields_with_defaults() {
    let config: AppConfig = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
    assert_eq!(config.theme, Theme::Dark);
    assert_eq!(config.hotkeys.quick_open, hotkey::DEFAULT_ACCELERATOR);
}

// ============================================================================
// Hotkey normalization
// ============================================================================

#[test]
fn normalize_maps_modifier_aliases() {
    assert_eq!(hotkey::normalize("cmd+shift+j"), "CommandOrControl+Shift+J");
    assert_eq!(hotkey::normalize("ctrl+alt+k"), "CommandOrControl+Alt+K");
    assert_eq!(hotkey::normalize("option+p"), "Alt+P");
}

#[test]
fn normalize_is_case_and_space_insensitive() {
    assert_eq!(hotkey::normalize("CMD + Shift + j"), "CommandOrControl+Shift+J");
}

#[test]
fn normalize_capitalizes_plain_keys() {
    assert_eq!(hotkey::normalize("f1"), "F1");
    assert_eq!(hotkey::normalize("space"), "Space");
}

#[test]
fn normalize_blank_yields_default() {
    assert_eq!(hotkey::normalize(""), hotkey::DEFAULT_ACCELERATOR);
    assert_eq!(hotkey::normalize("   "), hotkey::DEFAULT_ACCELERATOR);
}

#[test]
fn normalize_only_recognizes_the_short_aliases() {
    // "commandorcontrol" is not an alias; it passes through with plain
    // capitalization, same as any other key name.
    assert_eq!(
        hotkey::normalize("CommandOrControl+Shift+J"),
        "Commandorcontrol+Shift+J"
    );
}
