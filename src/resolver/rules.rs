// SPDX-License-Identifier: GPL-3.0-only

//! Declarative rule table

use super::context::ResolutionContext;
use super::{control, corrections, optics, sensor, statistics};
use crate::characteristics::CharacteristicKey;
use crate::characteristics::CharacteristicKey as K;
use crate::constants::{BASE_API_LEVEL, api_level};
use crate::errors::ResolveResult;
use crate::settings::Parameter as P;
use crate::settings::{Outcome, Parameter};
use std::fmt;

pub type ResolveFn = fn(&ResolutionContext<'_>) -> ResolveResult<Outcome>;

/// How one parameter is decided
#[derive(Clone, Copy)]
pub struct Rule {
    pub parameter: Parameter,
    /// Capability whose absence makes the parameter unsupported
    pub capability: Option<CharacteristicKey>,
    /// First platform level with this request key
    pub min_api_level: u32,
    /// Parameters this rule may read; all must come earlier in the order
    pub depends_on: &'static [Parameter],
    pub resolve: ResolveFn,
}

impl Rule {
    pub const fn new(parameter: Parameter, resolve: ResolveFn) -> Self {
        Self {
            parameter,
            capability: None,
            min_api_level: BASE_API_LEVEL,
            depends_on: &[],
            resolve,
        }
    }

    pub const fn reads(self, key: CharacteristicKey) -> Self {
        Self {
            capability: Some(key),
            ..self
        }
    }

    pub const fn after(self, depends_on: &'static [Parameter]) -> Self {
        Self { depends_on, ..self }
    }

    pub const fn since(self, min_api_level: u32) -> Self {
        Self {
            min_api_level,
            ..self
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("parameter", &self.parameter)
            .field("capability", &self.capability)
            .field("min_api_level", &self.min_api_level)
            .field("depends_on", &self.depends_on)
            .finish_non_exhaustive()
    }
}

const CONTROL: &[Parameter] = &[P::ControlMode];
const CONTROL_AWB: &[Parameter] = &[P::ControlMode, P::AwbMode];
const CONTROL_AE: &[Parameter] = &[P::ControlMode, P::AeMode];

/// Every parameter, in the order it is decided
///
/// AWB and AF are settled before AE, and every post-processing choice that
/// looks at a 3A routine comes after it.
pub static RESOLUTION_ORDER: &[Rule] = &[
    Rule::new(P::FlashMode, control::flash_mode).reads(K::FlashInfoAvailable),
    Rule::new(P::ControlMode, control::control_mode),
    Rule::new(P::CaptureIntent, control::capture_intent).reads(K::RequestAvailableCapabilities),
    // White balance
    Rule::new(P::AwbMode, control::awb_mode)
        .reads(K::ControlAwbAvailableModes)
        .after(CONTROL),
    Rule::new(P::AwbLock, control::awb_lock).after(CONTROL_AWB),
    Rule::new(P::AwbRegions, control::awb_regions),
    // Focus
    Rule::new(P::AfMode, control::af_mode)
        .reads(K::ControlAfAvailableModes)
        .after(CONTROL),
    Rule::new(P::AfRegions, control::af_regions),
    Rule::new(P::AfTrigger, control::not_applicable),
    // Exposure
    Rule::new(P::AeMode, control::ae_mode)
        .reads(K::ControlAeAvailableModes)
        .after(CONTROL),
    Rule::new(P::AeLock, control::ae_lock).after(CONTROL_AE),
    Rule::new(P::AeRegions, control::ae_regions),
    Rule::new(P::AePrecaptureTrigger, control::not_applicable),
    Rule::new(P::AeAntibandingMode, control::ae_antibanding)
        .reads(K::ControlAeAvailableAntibandingModes)
        .after(CONTROL_AE),
    Rule::new(P::AeExposureCompensation, control::ae_exposure_compensation)
        .reads(K::ControlAeCompensationRange)
        .after(CONTROL_AE),
    Rule::new(P::AeTargetFpsRange, control::ae_target_fps_range)
        .reads(K::ControlAeAvailableTargetFpsRanges)
        .after(CONTROL_AE),
    // Corrections
    Rule::new(P::BlackLevelLock, corrections::black_level_lock),
    Rule::new(P::ColorCorrectionAberrationMode, corrections::aberration_mode)
        .reads(K::ColorCorrectionAvailableAberrationModes),
    Rule::new(P::ColorCorrectionMode, corrections::color_correction_mode).after(&[P::AwbMode]),
    Rule::new(
        P::ColorCorrectionTransform,
        corrections::color_correction_transform,
    )
    .after(&[P::ColorCorrectionMode]),
    Rule::new(P::ColorCorrectionGains, corrections::color_correction_gains)
        .after(&[P::ColorCorrectionMode]),
    Rule::new(P::EffectMode, corrections::effect_mode).reads(K::ControlAvailableEffects),
    Rule::new(P::SceneMode, corrections::scene_mode).reads(K::ControlAvailableSceneModes),
    Rule::new(P::EnableZsl, corrections::enable_zsl).since(api_level::O),
    Rule::new(
        P::PostRawSensitivityBoost,
        corrections::post_raw_sensitivity_boost,
    )
    .reads(K::ControlPostRawSensitivityBoostRange)
    .after(CONTROL_AE)
    .since(api_level::N),
    Rule::new(P::VideoStabilizationMode, corrections::video_stabilization)
        .reads(K::ControlAvailableVideoStabilizationModes),
    Rule::new(P::DistortionCorrectionMode, corrections::distortion_correction)
        .reads(K::DistortionCorrectionAvailableModes)
        .since(api_level::P),
    Rule::new(P::EdgeMode, corrections::edge_mode).reads(K::EdgeAvailableEdgeModes),
    Rule::new(P::HotPixelMode, corrections::hot_pixel_mode)
        .reads(K::HotPixelAvailableHotPixelModes),
    Rule::new(P::NoiseReductionMode, corrections::noise_reduction_mode)
        .reads(K::NoiseReductionAvailableNoiseReductionModes),
    Rule::new(
        P::ReprocessEffectiveExposureFactor,
        corrections::reprocess_exposure_factor,
    )
    .reads(K::RequestAvailableCapabilities)
    .since(api_level::M),
    Rule::new(P::ShadingMode, corrections::shading_mode)
        .reads(K::ShadingAvailableModes)
        .since(api_level::M),
    Rule::new(P::TonemapMode, corrections::tonemap_mode).reads(K::TonemapAvailableToneMapModes),
    Rule::new(P::TonemapCurve, corrections::tonemap_curve).after(&[P::TonemapMode]),
    // Optics
    Rule::new(P::LensAperture, optics::aperture)
        .reads(K::LensInfoAvailableApertures)
        .after(&[P::AeMode]),
    Rule::new(P::LensFilterDensity, optics::filter_density)
        .reads(K::LensInfoAvailableFilterDensities),
    Rule::new(P::LensFocalLength, optics::focal_length).reads(K::LensInfoAvailableFocalLengths),
    Rule::new(P::LensFocusDistance, optics::focus_distance)
        .reads(K::LensInfoMinimumFocusDistance),
    Rule::new(
        P::LensOpticalStabilizationMode,
        optics::optical_stabilization,
    )
    .reads(K::LensInfoAvailableOpticalStabilization),
    // Statistics
    Rule::new(P::FaceDetectMode, statistics::face_detect)
        .reads(K::StatisticsInfoAvailableFaceDetectModes),
    Rule::new(P::HotPixelMapMode, statistics::hot_pixel_map)
        .reads(K::StatisticsInfoAvailableHotPixelMapModes),
    Rule::new(P::LensShadingMapMode, statistics::lens_shading_map)
        .reads(K::StatisticsInfoAvailableLensShadingMapModes)
        .since(api_level::M),
    Rule::new(P::OisDataMode, statistics::ois_data)
        .reads(K::StatisticsInfoAvailableOisDataModes)
        .since(api_level::P),
    // Sensor
    Rule::new(P::SensorSensitivity, sensor::sensitivity)
        .reads(K::SensorInfoSensitivityRange)
        .after(CONTROL_AE),
    Rule::new(P::SensorExposureTime, sensor::exposure_time)
        .reads(K::SensorInfoExposureTimeRange)
        .after(CONTROL_AE),
    Rule::new(P::SensorFrameDuration, sensor::frame_duration)
        .reads(K::ScalerAvailableMinFrameDurations)
        .after(CONTROL_AE),
    Rule::new(P::SensorTestPatternMode, sensor::test_pattern)
        .reads(K::SensorAvailableTestPatternModes),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_topological() {
        for (index, rule) in RESOLUTION_ORDER.iter().enumerate() {
            for dependency in rule.depends_on {
                let position = RESOLUTION_ORDER
                    .iter()
                    .position(|r| r.parameter == *dependency);
                assert!(
                    matches!(position, Some(p) if p < index),
                    "{} depends on {} which is not resolved before it",
                    rule.parameter,
                    dependency
                );
            }
        }
    }

    #[test]
    fn test_every_parameter_has_exactly_one_rule() {
        let order: Vec<_> = RESOLUTION_ORDER.iter().map(|r| r.parameter).collect();
        assert_eq!(
            order,
            Parameter::ALL.to_vec(),
            "rule table must follow the parameter order one-to-one"
        );
    }

    #[test]
    fn test_flash_is_first() {
        assert_eq!(RESOLUTION_ORDER[0].parameter, Parameter::FlashMode);
        assert!(RESOLUTION_ORDER[0].depends_on.is_empty());
    }
}
