//! Unit tests for settings persistence.

use spatial_canvas::settings::Settings;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("nope.json")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let mut settings = Settings::default();
    settings.wheel_zoom_sensitivity = 0.02;
    settings.stage.item_width = 160.0;

    settings.save(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "wheel_line_height": 32.0, "stage": { "gap": 4.0 } }"#).unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.wheel_line_height, 32.0);
    assert_eq!(settings.stage.gap, 4.0);
    assert_eq!(settings.stage.item_width, Settings::default().stage.item_width);
    assert_eq!(settings.pinch_zoom_sensitivity, Settings::default().pinch_zoom_sensitivity);
}

#[test]
fn test_degenerate_values_are_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "wheel_zoom_sensitivity": -1.0, "stage": { "item_width": 0.0 } }"#)
        .unwrap();

    let settings = Settings::load(&path).unwrap();
    let defaults = Settings::default();
    assert_eq!(settings.wheel_zoom_sensitivity, defaults.wheel_zoom_sensitivity);
    assert_eq!(settings.stage.item_width, defaults.stage.item_width);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Settings::load(&path).is_err());
}
