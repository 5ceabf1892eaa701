// SPDX-License-Identifier: GPL-3.0-only

//! Capability key vocabulary
//!
//! The platform defines these names; the resolver never invents new ones.
//! Each key carries the shape of value it must hold.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Shape of the value a capability key holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Bool,
    Int,
    Long,
    Float,
    IntList,
    FloatList,
    BoolList,
    IntRange,
    LongRange,
    RangeList,
    Size,
    KeyList,
    StreamDurations,
}

impl ValueKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::Long => "long integer",
            ValueKind::Float => "float",
            ValueKind::IntList => "integer list",
            ValueKind::FloatList => "float list",
            ValueKind::BoolList => "boolean list",
            ValueKind::IntRange => "integer range",
            ValueKind::LongRange => "long range",
            ValueKind::RangeList => "range list",
            ValueKind::Size => "size",
            ValueKind::KeyList => "request key list",
            ValueKind::StreamDurations => "stream duration list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

macro_rules! characteristic_keys {
    ($($variant:ident => $name:literal, $kind:ident;)+) => {
        /// A platform capability key understood by the resolver
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum CharacteristicKey {
            $($variant,)+
        }

        impl CharacteristicKey {
            /// Every recognized key, in vocabulary order
            pub const ALL: &'static [CharacteristicKey] = &[$(CharacteristicKey::$variant,)+];

            /// Platform name of the key (e.g. "FLASH_INFO_AVAILABLE")
            pub fn as_str(self) -> &'static str {
                match self {
                    $(CharacteristicKey::$variant => $name,)+
                }
            }

            /// Value shape this key must hold
            pub fn kind(self) -> ValueKind {
                match self {
                    $(CharacteristicKey::$variant => ValueKind::$kind,)+
                }
            }
        }

        impl FromStr for CharacteristicKey {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(CharacteristicKey::$variant),)+
                    other => Err(format!("unknown capability key: {other}")),
                }
            }
        }
    };
}

characteristic_keys! {
    InfoSupportedHardwareLevel => "INFO_SUPPORTED_HARDWARE_LEVEL", Int;
    SensorInfoPixelArraySize => "SENSOR_INFO_PIXEL_ARRAY_SIZE", Size;
    RequestAvailableCapabilities => "REQUEST_AVAILABLE_CAPABILITIES", IntList;
    RequestAvailableRequestKeys => "REQUEST_AVAILABLE_REQUEST_KEYS", KeyList;
    FlashInfoAvailable => "FLASH_INFO_AVAILABLE", Bool;
    ControlAvailableModes => "CONTROL_AVAILABLE_MODES", IntList;
    ControlAwbAvailableModes => "CONTROL_AWB_AVAILABLE_MODES", IntList;
    ControlAwbLockAvailable => "CONTROL_AWB_LOCK_AVAILABLE", Bool;
    ControlAfAvailableModes => "CONTROL_AF_AVAILABLE_MODES", IntList;
    ControlAeAvailableModes => "CONTROL_AE_AVAILABLE_MODES", IntList;
    ControlAeLockAvailable => "CONTROL_AE_LOCK_AVAILABLE", Bool;
    ControlAeAvailableAntibandingModes => "CONTROL_AE_AVAILABLE_ANTIBANDING_MODES", IntList;
    ControlAeCompensationRange => "CONTROL_AE_COMPENSATION_RANGE", IntRange;
    ControlAeAvailableTargetFpsRanges => "CONTROL_AE_AVAILABLE_TARGET_FPS_RANGES", RangeList;
    ControlMaxRegionsAe => "CONTROL_MAX_REGIONS_AE", Int;
    ControlMaxRegionsAf => "CONTROL_MAX_REGIONS_AF", Int;
    ControlMaxRegionsAwb => "CONTROL_MAX_REGIONS_AWB", Int;
    ControlAvailableEffects => "CONTROL_AVAILABLE_EFFECTS", IntList;
    ControlAvailableSceneModes => "CONTROL_AVAILABLE_SCENE_MODES", IntList;
    ControlAvailableVideoStabilizationModes => "CONTROL_AVAILABLE_VIDEO_STABILIZATION_MODES", IntList;
    ControlPostRawSensitivityBoostRange => "CONTROL_POST_RAW_SENSITIVITY_BOOST_RANGE", IntRange;
    ColorCorrectionAvailableAberrationModes => "COLOR_CORRECTION_AVAILABLE_ABERRATION_MODES", IntList;
    DistortionCorrectionAvailableModes => "DISTORTION_CORRECTION_AVAILABLE_MODES", IntList;
    EdgeAvailableEdgeModes => "EDGE_AVAILABLE_EDGE_MODES", IntList;
    HotPixelAvailableHotPixelModes => "HOT_PIXEL_AVAILABLE_HOT_PIXEL_MODES", IntList;
    NoiseReductionAvailableNoiseReductionModes => "NOISE_REDUCTION_AVAILABLE_NOISE_REDUCTION_MODES", IntList;
    ShadingAvailableModes => "SHADING_AVAILABLE_MODES", IntList;
    TonemapAvailableToneMapModes => "TONEMAP_AVAILABLE_TONE_MAP_MODES", IntList;
    TonemapMaxCurvePoints => "TONEMAP_MAX_CURVE_POINTS", Int;
    LensInfoAvailableApertures => "LENS_INFO_AVAILABLE_APERTURES", FloatList;
    LensInfoAvailableFilterDensities => "LENS_INFO_AVAILABLE_FILTER_DENSITIES", FloatList;
    LensInfoAvailableFocalLengths => "LENS_INFO_AVAILABLE_FOCAL_LENGTHS", FloatList;
    LensInfoMinimumFocusDistance => "LENS_INFO_MINIMUM_FOCUS_DISTANCE", Float;
    LensInfoAvailableOpticalStabilization => "LENS_INFO_AVAILABLE_OPTICAL_STABILIZATION", IntList;
    StatisticsInfoAvailableFaceDetectModes => "STATISTICS_INFO_AVAILABLE_FACE_DETECT_MODES", IntList;
    StatisticsInfoAvailableHotPixelMapModes => "STATISTICS_INFO_AVAILABLE_HOT_PIXEL_MAP_MODES", BoolList;
    StatisticsInfoAvailableLensShadingMapModes => "STATISTICS_INFO_AVAILABLE_LENS_SHADING_MAP_MODES", IntList;
    StatisticsInfoAvailableOisDataModes => "STATISTICS_INFO_AVAILABLE_OIS_DATA_MODES", IntList;
    SensorInfoSensitivityRange => "SENSOR_INFO_SENSITIVITY_RANGE", IntRange;
    SensorMaxAnalogSensitivity => "SENSOR_MAX_ANALOG_SENSITIVITY", Int;
    SensorInfoExposureTimeRange => "SENSOR_INFO_EXPOSURE_TIME_RANGE", LongRange;
    SensorInfoMaxFrameDuration => "SENSOR_INFO_MAX_FRAME_DURATION", Long;
    SensorAvailableTestPatternModes => "SENSOR_AVAILABLE_TEST_PATTERN_MODES", IntList;
    ScalerAvailableMinFrameDurations => "SCALER_AVAILABLE_MIN_FRAME_DURATIONS", StreamDurations;
}

impl CharacteristicKey {
    /// Keys the platform guarantees on every device
    pub const MANDATORY: &'static [CharacteristicKey] = &[
        CharacteristicKey::InfoSupportedHardwareLevel,
        CharacteristicKey::SensorInfoPixelArraySize,
        CharacteristicKey::RequestAvailableCapabilities,
    ];

    pub fn is_mandatory(self) -> bool {
        Self::MANDATORY.contains(&self)
    }
}

impl fmt::Display for CharacteristicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CharacteristicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for key in CharacteristicKey::ALL {
            assert_eq!(
                key.as_str().parse::<CharacteristicKey>(),
                Ok(*key),
                "{key:?} should parse back from its own name"
            );
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!("CONTROL_AVAILABLE_EXTENDED_SCENE_MODE_CAPABILITIES"
            .parse::<CharacteristicKey>()
            .is_err());
    }

    #[test]
    fn test_mandatory_keys() {
        assert!(CharacteristicKey::InfoSupportedHardwareLevel.is_mandatory());
        assert!(CharacteristicKey::SensorInfoPixelArraySize.is_mandatory());
        assert!(!CharacteristicKey::FlashInfoAvailable.is_mandatory());
    }
}
