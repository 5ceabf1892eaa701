// SPDX-License-Identifier: GPL-3.0-only

//! Shared fixtures for integration tests

#![allow(dead_code)]

use manual_camera::characteristics::CapabilityValue;
use manual_camera::{
    CapabilitySnapshot, CharacteristicKey, ConfigurationResolver, Parameter, ResolvedSettings,
    ResolverConfig,
};

/// A FULL-level, RAW-capable rear camera
pub const FULL_DEVICE_JSON: &str = include_str!("../fixtures/full_device.json");

pub fn full_device() -> CapabilitySnapshot {
    CapabilitySnapshot::from_json_str(FULL_DEVICE_JSON).expect("fixture should parse")
}

pub fn modes(codes: &[i32]) -> CapabilityValue {
    CapabilityValue::IntList(codes.to_vec())
}

/// Full device with the control and AE mode lists replaced
pub fn device_with_modes(control: &[i32], ae: &[i32]) -> CapabilitySnapshot {
    full_device()
        .with(CharacteristicKey::ControlAvailableModes, modes(control))
        .with(CharacteristicKey::ControlAeAvailableModes, modes(ae))
}

pub fn resolve(snapshot: &CapabilitySnapshot) -> ResolvedSettings {
    resolve_with(snapshot, ResolverConfig::default())
}

pub fn resolve_with(snapshot: &CapabilitySnapshot, config: ResolverConfig) -> ResolvedSettings {
    ConfigurationResolver::new(config)
        .resolve_settings(snapshot)
        .expect("resolution should succeed")
}

pub fn label(settings: &ResolvedSettings, parameter: Parameter) -> String {
    settings
        .get(parameter)
        .unwrap_or_else(|| panic!("{parameter} should have been resolved"))
        .label()
}
