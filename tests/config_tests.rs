// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use capture_flow::backends::camera::types::{CameraFacing, CaptureQuality};
use capture_flow::config::{self, Config};

#[test]
fn test_config_default() {
    // Test that default config can be created
    let config = Config::default();

    // Check sensible defaults
    assert_eq!(
        config.default_facing,
        CameraFacing::Back,
        "Sessions should start on the back camera by default"
    );
    assert_eq!(
        config.capture.quality,
        CaptureQuality::Maximum,
        "Stills should default to maximum quality"
    );
    assert!(
        config.save_dir.is_none(),
        "Save directory should fall back to the platform pictures dir"
    );
}

#[test]
fn test_config_resolve_save_dir_override() {
    let config = Config {
        save_dir: Some("/tmp/stills".into()),
        ..Config::default()
    };

    assert_eq!(
        config.resolve_save_dir(),
        std::path::PathBuf::from("/tmp/stills")
    );
}

#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        save_dir: Some("/tmp/stills".into()),
        default_facing: CameraFacing::Front,
        ..Config::default()
    };

    config::save_to_path(&config, &path).expect("save should succeed");
    let loaded = config::load_from_path(&path).expect("load should succeed");

    assert_eq!(loaded, config);
}
