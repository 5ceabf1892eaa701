// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Platform level assumed when no configuration says otherwise
pub const DEFAULT_API_LEVEL: u32 = 28;

/// First platform level with the camera2 API
pub const BASE_API_LEVEL: u32 = 21;

/// Platform levels that introduced request keys or capability keys
pub mod api_level {
    /// CONTROL_AVAILABLE_MODES, lock availability, shading, reprocessing,
    /// lens shading map
    pub const M: u32 = 23;
    /// Post-raw sensitivity boost
    pub const N: u32 = 24;
    /// Zero shutter lag
    pub const O: u32 = 26;
    /// Distortion correction, OIS data
    pub const P: u32 = 28;
}

/// Ceiling for the lower bound of an acceptable AE target FPS range
pub const MAX_FPS_LOWER_BOUND: i32 = 30;

/// Post-raw sensitivity boost that leaves the raw signal unscaled (ISO units)
pub const UNITY_SENSITIVITY_BOOST: i32 = 100;

/// Reprocessing exposure factor that leaves the exposure unchanged
pub const UNITY_EXPOSURE_FACTOR: f32 = 1.0;

/// Directory name under the user's config dir
pub const CONFIG_DIR_NAME: &str = "manual-camera";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";
