// SPDX-License-Identifier: GPL-3.0-only

//! camera2 metadata enumerations
//!
//! Integer codes and names for the enumerated values the resolver chooses
//! between. Codes match the platform's `CameraMetadata` constants so that an
//! apply sink can hand them straight to a native request builder.

use serde::Serialize;

/// One enumerated value of a camera2 mode key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ModeOption {
    /// Platform integer code
    pub code: i32,
    /// Platform constant name without the key prefix (e.g. "OFF")
    pub name: &'static str,
}

impl ModeOption {
    pub const fn new(code: i32, name: &'static str) -> Self {
        Self { code, name }
    }
}

pub mod flash_mode {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const SINGLE: ModeOption = ModeOption::new(1, "SINGLE");
    pub const TORCH: ModeOption = ModeOption::new(2, "TORCH");
}

pub mod control_mode {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const AUTO: ModeOption = ModeOption::new(1, "AUTO");
    pub const USE_SCENE_MODE: ModeOption = ModeOption::new(2, "USE_SCENE_MODE");
}

pub mod capture_intent {
    use super::ModeOption;
    pub const PREVIEW: ModeOption = ModeOption::new(1, "PREVIEW");
    pub const MANUAL: ModeOption = ModeOption::new(6, "MANUAL");
}

pub mod awb_mode {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const AUTO: ModeOption = ModeOption::new(1, "AUTO");
}

pub mod af_mode {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const AUTO: ModeOption = ModeOption::new(1, "AUTO");
}

pub mod ae_mode {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const ON: ModeOption = ModeOption::new(1, "ON");
}

pub mod ae_antibanding {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const HZ_50: ModeOption = ModeOption::new(1, "50HZ");
    pub const HZ_60: ModeOption = ModeOption::new(2, "60HZ");
    pub const AUTO: ModeOption = ModeOption::new(3, "AUTO");
}

pub mod effect_mode {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
}

pub mod scene_mode {
    use super::ModeOption;
    pub const DISABLED: ModeOption = ModeOption::new(0, "DISABLED");
}

pub mod video_stabilization {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const ON: ModeOption = ModeOption::new(1, "ON");
}

pub mod aberration {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const FAST: ModeOption = ModeOption::new(1, "FAST");
    pub const HIGH_QUALITY: ModeOption = ModeOption::new(2, "HIGH_QUALITY");
}

pub mod color_correction {
    use super::ModeOption;
    pub const TRANSFORM_MATRIX: ModeOption = ModeOption::new(0, "TRANSFORM_MATRIX");
    pub const FAST: ModeOption = ModeOption::new(1, "FAST");
}

pub mod distortion_correction {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const FAST: ModeOption = ModeOption::new(1, "FAST");
}

pub mod edge {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const FAST: ModeOption = ModeOption::new(1, "FAST");
}

pub mod hot_pixel {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const FAST: ModeOption = ModeOption::new(1, "FAST");
}

pub mod noise_reduction {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const FAST: ModeOption = ModeOption::new(1, "FAST");
    pub const MINIMAL: ModeOption = ModeOption::new(3, "MINIMAL");
}

pub mod shading {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const FAST: ModeOption = ModeOption::new(1, "FAST");
}

pub mod tonemap {
    use super::ModeOption;
    pub const CONTRAST_CURVE: ModeOption = ModeOption::new(0, "CONTRAST_CURVE");
    pub const FAST: ModeOption = ModeOption::new(1, "FAST");
}

pub mod optical_stabilization {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const ON: ModeOption = ModeOption::new(1, "ON");
}

pub mod face_detect {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const SIMPLE: ModeOption = ModeOption::new(1, "SIMPLE");
    pub const FULL: ModeOption = ModeOption::new(2, "FULL");
}

/// Boolean-valued on the platform; codes are the bool as 0/1
pub mod hot_pixel_map {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const ON: ModeOption = ModeOption::new(1, "ON");
}

pub mod lens_shading_map {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const ON: ModeOption = ModeOption::new(1, "ON");
}

pub mod ois_data {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
    pub const ON: ModeOption = ModeOption::new(1, "ON");
}

pub mod test_pattern {
    use super::ModeOption;
    pub const OFF: ModeOption = ModeOption::new(0, "OFF");
}

/// `INFO_SUPPORTED_HARDWARE_LEVEL` values
pub mod hardware_level {
    pub const LIMITED: i32 = 0;
    pub const FULL: i32 = 1;
    pub const LEGACY: i32 = 2;
    pub const LEVEL_3: i32 = 3;
    pub const EXTERNAL: i32 = 4;

    /// Levels whose devices cannot run with 3A switched off entirely
    pub fn is_auto_only(level: i32) -> bool {
        level == LEGACY || level == EXTERNAL
    }

    pub fn name(level: i32) -> &'static str {
        match level {
            LIMITED => "LIMITED",
            FULL => "FULL",
            LEGACY => "LEGACY",
            LEVEL_3 => "LEVEL_3",
            EXTERNAL => "EXTERNAL",
            _ => "UNKNOWN",
        }
    }
}

/// `REQUEST_AVAILABLE_CAPABILITIES` values
pub mod capabilities {
    pub const BACKWARD_COMPATIBLE: i32 = 0;
    pub const MANUAL_SENSOR: i32 = 1;
    pub const MANUAL_POST_PROCESSING: i32 = 2;
    pub const RAW: i32 = 3;
    pub const PRIVATE_REPROCESSING: i32 = 4;
    pub const READ_SENSOR_SETTINGS: i32 = 5;
    pub const BURST_CAPTURE: i32 = 6;
    pub const YUV_REPROCESSING: i32 = 7;
}

/// `ImageFormat` codes used in stream configurations
pub mod image_format {
    pub const RAW_SENSOR: i32 = 0x20;
    pub const YUV_420_888: i32 = 0x23;

    pub fn name(format: i32) -> &'static str {
        match format {
            RAW_SENSOR => "RAW_SENSOR",
            YUV_420_888 => "YUV_420_888",
            _ => "OTHER",
        }
    }
}
