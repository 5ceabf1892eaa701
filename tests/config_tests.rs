// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration and snapshot loading

mod common;

use manual_camera::errors::ConfigError;
use manual_camera::{CapabilitySnapshot, OutputFormat, ResolverConfig, SnapshotError};
use std::io::Write;

#[test]
fn test_config_default() {
    let config = ResolverConfig::default();
    assert_eq!(config.api_level, 28, "Default API level should be 28");
    assert!(
        !config.force_control_mode_auto,
        "Forced auto mode should be off by default"
    );
    assert_eq!(config.output_format, OutputFormat::Auto);
    assert_eq!(config.max_fps_lower_bound, 30);
}

#[test]
fn test_config_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "api_level": 24, "force_control_mode_auto": true, "output_format": "raw" }}"#
    )
    .unwrap();

    let config = ResolverConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.api_level, 24);
    assert!(config.force_control_mode_auto);
    assert_eq!(config.output_format, OutputFormat::Raw);
    assert_eq!(config.max_fps_lower_bound, 30, "Unset fields keep defaults");
}

#[test]
fn test_config_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ResolverConfig::load(Some(&dir.path().join("absent.json")));
    assert!(matches!(result, Err(ConfigError::Read(_))));
}

#[test]
fn test_config_invalid_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "api_level": "twenty" }}"#).unwrap();
    assert!(matches!(
        ResolverConfig::load(Some(file.path())),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = ResolverConfig {
        api_level: 26,
        output_format: OutputFormat::Yuv,
        ..ResolverConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"yuv\""));
    assert_eq!(ResolverConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_snapshot_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("camera0.json");
    std::fs::write(&path, common::FULL_DEVICE_JSON).unwrap();

    let snapshot = CapabilitySnapshot::from_path(&path).unwrap();
    assert_eq!(snapshot, common::full_device());
}

#[test]
fn test_snapshot_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        CapabilitySnapshot::from_path(&dir.path().join("missing.json")),
        Err(SnapshotError::Parse(_))
    ));
}
