// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands
//!
//! This module provides command-line functionality for:
//! - Resolving and reporting a capture configuration
//! - Inspecting a capability snapshot
//! - Listing the known key vocabulary

use manual_camera::errors::{AppError, ConfigError};
use manual_camera::metadata::hardware_level;
use manual_camera::{
    AppResult, CapabilitySnapshot, CaptureRequestBuilder, CharacteristicKey,
    ConfigurationResolver, OutputFormat, Parameter, ReportFormatter, ResolverConfig,
    apply_settings,
};
use std::path::Path;

/// Command-line overrides applied on top of the configuration file
pub struct Overrides {
    pub force_auto: bool,
    pub api_level: Option<u32>,
    pub output_format: Option<String>,
}

impl Overrides {
    fn apply(self, mut config: ResolverConfig) -> AppResult<ResolverConfig> {
        if self.force_auto {
            config.force_control_mode_auto = true;
        }
        if let Some(level) = self.api_level {
            config.api_level = level;
        }
        if let Some(name) = self.output_format {
            config.output_format = OutputFormat::ALL
                .into_iter()
                .find(|format| format.display_name() == name)
                .ok_or_else(|| {
                    AppError::Config(ConfigError::Invalid(format!(
                        "unknown output format '{}' (expected auto, raw or yuv)",
                        name
                    )))
                })?;
        }
        Ok(config)
    }
}

/// Resolve a snapshot and print the report (or JSON)
pub fn resolve(
    snapshot_path: &Path,
    config_path: Option<&Path>,
    overrides: Overrides,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = overrides.apply(ResolverConfig::load(config_path).map_err(AppError::from)?)?;
    let snapshot = CapabilitySnapshot::from_path(snapshot_path).map_err(AppError::from)?;

    let resolver = ConfigurationResolver::new(config);
    let resolution = resolver.resolve(&snapshot).map_err(AppError::from)?;

    let mut request = CaptureRequestBuilder::new();
    let written = apply_settings(&resolution.settings, &mut request);

    if json {
        let document = serde_json::json!({
            "camera_id": snapshot.camera_id(),
            "config": resolver.config(),
            "settings": resolution.settings,
            "request": request,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    println!("Camera {}", snapshot.camera_id());
    println!();
    print!(
        "{}",
        ReportFormatter::new()
            .with_key_names(verbose)
            .render(&resolution.settings)
    );
    println!();
    println!(
        "{} of {} parameters written to the capture request",
        written,
        resolution.settings.len()
    );

    Ok(())
}

/// Print every capability the snapshot reports
pub fn inspect(snapshot_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = CapabilitySnapshot::from_path(snapshot_path).map_err(AppError::from)?;

    println!("Camera {} ({} capabilities)", snapshot.camera_id(), snapshot.len());
    if let Ok(level) = snapshot.hardware_level() {
        println!("Hardware level: {}", hardware_level::name(level));
    }
    println!();

    let width = snapshot
        .iter()
        .map(|(key, _)| key.as_str().len())
        .max()
        .unwrap_or(0);
    for (key, value) in snapshot.iter() {
        println!("  {:<width$}  {}", key.as_str(), value, width = width);
    }

    let missing: Vec<&str> = CharacteristicKey::MANDATORY
        .iter()
        .filter(|key| !snapshot.contains(**key))
        .map(|key| key.as_str())
        .collect();
    if !missing.is_empty() {
        println!();
        println!("Missing mandatory keys: {}", missing.join(", "));
    }

    Ok(())
}

/// Print the capability and request key vocabulary
pub fn list_keys() -> Result<(), Box<dyn std::error::Error>> {
    println!("Capability keys:");
    for key in CharacteristicKey::ALL {
        let marker = if key.is_mandatory() { " (mandatory)" } else { "" };
        println!("  {} [{}]{}", key.as_str(), key.kind(), marker);
    }
    println!();
    println!("Request parameters (resolution order):");
    for parameter in Parameter::ALL {
        println!("  {:<40} {}", parameter.key_name(), parameter.display_name());
    }
    Ok(())
}
