// SPDX-License-Identifier: GPL-3.0-only

//! Request parameters the resolver decides

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! request_parameters {
    ($($variant:ident => $key:literal, $display:literal;)+) => {
        /// One settable capture-request key
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Parameter {
            $($variant,)+
        }

        impl Parameter {
            /// Every parameter, in resolution order
            pub const ALL: &'static [Parameter] = &[$(Parameter::$variant,)+];

            /// Platform request key name (e.g. "CONTROL_AE_MODE")
            pub fn key_name(self) -> &'static str {
                match self {
                    $(Parameter::$variant => $key,)+
                }
            }

            /// Human-readable name used in reports
            pub fn display_name(self) -> &'static str {
                match self {
                    $(Parameter::$variant => $display,)+
                }
            }
        }

        impl FromStr for Parameter {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(Parameter::$variant),)+
                    other => Err(format!("unknown request key: {other}")),
                }
            }
        }
    };
}

request_parameters! {
    FlashMode => "FLASH_MODE", "Flash mode";
    ControlMode => "CONTROL_MODE", "Control mode";
    CaptureIntent => "CONTROL_CAPTURE_INTENT", "Capture intent";
    AwbMode => "CONTROL_AWB_MODE", "White balance mode";
    AwbLock => "CONTROL_AWB_LOCK", "White balance lock";
    AwbRegions => "CONTROL_AWB_REGIONS", "White balance regions";
    AfMode => "CONTROL_AF_MODE", "Auto-focus mode";
    AfRegions => "CONTROL_AF_REGIONS", "Auto-focus regions";
    AfTrigger => "CONTROL_AF_TRIGGER", "Auto-focus trigger";
    AeMode => "CONTROL_AE_MODE", "Auto-exposure mode";
    AeLock => "CONTROL_AE_LOCK", "Auto-exposure lock";
    AeRegions => "CONTROL_AE_REGIONS", "Auto-exposure regions";
    AePrecaptureTrigger => "CONTROL_AE_PRECAPTURE_TRIGGER", "Auto-exposure precapture trigger";
    AeAntibandingMode => "CONTROL_AE_ANTIBANDING_MODE", "Auto-exposure antibanding";
    AeExposureCompensation => "CONTROL_AE_EXPOSURE_COMPENSATION", "Exposure compensation";
    AeTargetFpsRange => "CONTROL_AE_TARGET_FPS_RANGE", "Target FPS range";
    BlackLevelLock => "BLACK_LEVEL_LOCK", "Black level lock";
    ColorCorrectionAberrationMode => "COLOR_CORRECTION_ABERRATION_MODE", "Chromatic aberration correction";
    ColorCorrectionMode => "COLOR_CORRECTION_MODE", "Color correction mode";
    ColorCorrectionTransform => "COLOR_CORRECTION_TRANSFORM", "Color correction transform";
    ColorCorrectionGains => "COLOR_CORRECTION_GAINS", "Color correction gains";
    EffectMode => "CONTROL_EFFECT_MODE", "Effect mode";
    SceneMode => "CONTROL_SCENE_MODE", "Scene mode";
    EnableZsl => "CONTROL_ENABLE_ZSL", "Zero shutter lag";
    PostRawSensitivityBoost => "CONTROL_POST_RAW_SENSITIVITY_BOOST", "Post-raw sensitivity boost";
    VideoStabilizationMode => "CONTROL_VIDEO_STABILIZATION_MODE", "Video stabilization";
    DistortionCorrectionMode => "DISTORTION_CORRECTION_MODE", "Distortion correction";
    EdgeMode => "EDGE_MODE", "Edge enhancement";
    HotPixelMode => "HOT_PIXEL_MODE", "Hot pixel correction";
    NoiseReductionMode => "NOISE_REDUCTION_MODE", "Noise reduction";
    ReprocessEffectiveExposureFactor => "REPROCESS_EFFECTIVE_EXPOSURE_FACTOR", "Reprocess exposure factor";
    ShadingMode => "SHADING_MODE", "Lens shading correction";
    TonemapMode => "TONEMAP_MODE", "Tonemap mode";
    TonemapCurve => "TONEMAP_CURVE", "Tonemap curve";
    LensAperture => "LENS_APERTURE", "Lens aperture";
    LensFilterDensity => "LENS_FILTER_DENSITY", "Lens filter density";
    LensFocalLength => "LENS_FOCAL_LENGTH", "Lens focal length";
    LensFocusDistance => "LENS_FOCUS_DISTANCE", "Lens focus distance";
    LensOpticalStabilizationMode => "LENS_OPTICAL_STABILIZATION_MODE", "Optical stabilization";
    FaceDetectMode => "STATISTICS_FACE_DETECT_MODE", "Face detection";
    HotPixelMapMode => "STATISTICS_HOT_PIXEL_MAP_MODE", "Hot pixel map";
    LensShadingMapMode => "STATISTICS_LENS_SHADING_MAP_MODE", "Lens shading map";
    OisDataMode => "STATISTICS_OIS_DATA_MODE", "OIS data";
    SensorSensitivity => "SENSOR_SENSITIVITY", "Sensor sensitivity";
    SensorExposureTime => "SENSOR_EXPOSURE_TIME", "Sensor exposure time";
    SensorFrameDuration => "SENSOR_FRAME_DURATION", "Sensor frame duration";
    SensorTestPatternMode => "SENSOR_TEST_PATTERN_MODE", "Sensor test pattern";
}

impl Parameter {
    /// Lock-style flags are reported as Engaged/Open instead of ON/OFF
    pub fn is_lock(self) -> bool {
        matches!(
            self,
            Parameter::AwbLock | Parameter::AeLock | Parameter::BlackLevelLock
        )
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}

impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key_name())
    }
}
