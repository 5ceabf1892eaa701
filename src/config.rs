// SPDX-License-Identifier: GPL-3.0-only

//! Resolver configuration
//!
//! Configuration is an explicit value handed to the resolver. The binary
//! loads it from JSON and lets command-line flags override individual fields.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_LEVEL, MAX_FPS_LOWER_BOUND};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Output stream the capture session will be configured with
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// RAW_SENSOR when the device advertises RAW capture, else YUV_420_888
    #[default]
    Auto,
    /// Always RAW_SENSOR
    Raw,
    /// Always YUV_420_888
    Yuv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Auto, OutputFormat::Raw, OutputFormat::Yuv];

    pub fn display_name(&self) -> &'static str {
        match self {
            OutputFormat::Auto => "auto",
            OutputFormat::Raw => "raw",
            OutputFormat::Yuv => "yuv",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Platform version of the device; newer keys are unsupported below it
    pub api_level: u32,
    /// Debug override: run control, AWB, AF and AE in AUTO
    pub force_control_mode_auto: bool,
    /// Output stream used for frame duration and boost decisions
    pub output_format: OutputFormat,
    /// Highest acceptable lower bound for the AE target FPS range
    pub max_fps_lower_bound: i32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            api_level: DEFAULT_API_LEVEL,
            force_control_mode_auto: false,
            output_format: OutputFormat::default(),
            max_fps_lower_bound: MAX_FPS_LOWER_BOUND,
        }
    }
}

impl ResolverConfig {
    /// Default configuration file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Read a configuration file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&json)?;
        info!(path = %path.display(), "Loaded resolver configuration");
        Ok(config)
    }

    /// Load from an explicit path, else the default location, else defaults
    ///
    /// An explicit path must exist; a missing default file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ResolverConfig::from_json_str(r#"{ "api_level": 23 }"#).unwrap();
        assert_eq!(config.api_level, 23);
        assert_eq!(config.max_fps_lower_bound, MAX_FPS_LOWER_BOUND);
        assert_eq!(config.output_format, OutputFormat::Auto);
    }

    #[test]
    fn test_output_format_is_lowercase() {
        let config = ResolverConfig::from_json_str(r#"{ "output_format": "yuv" }"#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Yuv);
        assert!(ResolverConfig::from_json_str(r#"{ "output_format": "YUV" }"#).is_err());
    }
}
