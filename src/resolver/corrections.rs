// SPDX-License-Identifier: GPL-3.0-only

//! Post-processing stages between the sensor and the output buffer

use super::context::ResolutionContext;
use super::select::prefer_first_supported;
use crate::characteristics::CharacteristicKey;
use crate::constants::{UNITY_EXPOSURE_FACTOR, UNITY_SENSITIVITY_BOOST};
use crate::errors::ResolveResult;
use crate::metadata::{
    aberration, capabilities, color_correction, distortion_correction, edge, effect_mode,
    hot_pixel, image_format, noise_reduction, scene_mode, shading, tonemap, video_stabilization,
};
use crate::settings::{
    ColorTransform, Outcome, Parameter, Preference, RggbGains, SettingValue, TonemapCurve,
};

pub fn black_level_lock(_ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    Ok(Outcome::Set(SettingValue::Flag(true)))
}

pub fn aberration_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::ColorCorrectionAvailableAberrationModes,
        &[aberration::OFF, aberration::FAST],
    )
}

/// Manual transform unless auto white balance owns the color pipeline
pub fn color_correction_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    Ok(Outcome::Set(if ctx.awb_auto()? {
        SettingValue::mode(color_correction::FAST, Preference::Fallback)
    } else {
        SettingValue::mode(color_correction::TRANSFORM_MATRIX, Preference::Preferred)
    }))
}

fn transform_engaged(ctx: &ResolutionContext<'_>) -> ResolveResult<bool> {
    Ok(ctx.upstream(Parameter::ColorCorrectionMode)?.mode_code()
        == Some(color_correction::TRANSFORM_MATRIX.code))
}

pub fn color_correction_transform(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if !transform_engaged(ctx)? {
        return Ok(Outcome::Disabled);
    }
    Ok(Outcome::Set(SettingValue::Transform(ColorTransform::IDENTITY)))
}

pub fn color_correction_gains(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if !transform_engaged(ctx)? {
        return Ok(Outcome::Disabled);
    }
    Ok(Outcome::Set(SettingValue::Gains(RggbGains::UNITY)))
}

pub fn effect_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::ControlAvailableEffects,
        &[effect_mode::OFF],
    )
}

pub fn scene_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::ControlAvailableSceneModes,
        &[scene_mode::DISABLED],
    )
}

pub fn enable_zsl(_ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    Ok(Outcome::Set(SettingValue::Flag(false)))
}

/// Unity boost for processed output; RAW output is never boosted
pub fn post_raw_sensitivity_boost(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if ctx.auto_exposure()? {
        return Ok(Outcome::Disabled);
    }
    if ctx.output_format()? == image_format::RAW_SENSOR {
        return Ok(Outcome::NotApplicable);
    }
    Ok(
        match ctx
            .snapshot()
            .int_range(CharacteristicKey::ControlPostRawSensitivityBoostRange)?
        {
            Some(range) => Outcome::Set(SettingValue::Int(
                UNITY_SENSITIVITY_BOOST.clamp(range.lower, range.upper),
            )),
            None => Outcome::NotSupported,
        },
    )
}

pub fn video_stabilization(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::ControlAvailableVideoStabilizationModes,
        &[video_stabilization::OFF],
    )
}

pub fn distortion_correction(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::DistortionCorrectionAvailableModes,
        &[distortion_correction::OFF, distortion_correction::FAST],
    )
}

pub fn edge_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::EdgeAvailableEdgeModes,
        &[edge::OFF, edge::FAST],
    )
}

pub fn hot_pixel_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::HotPixelAvailableHotPixelModes,
        &[hot_pixel::OFF, hot_pixel::FAST],
    )
}

pub fn noise_reduction_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::NoiseReductionAvailableNoiseReductionModes,
        &[
            noise_reduction::OFF,
            noise_reduction::MINIMAL,
            noise_reduction::FAST,
        ],
    )
}

/// Only meaningful for devices that can reprocess YUV captures
pub fn reprocess_exposure_factor(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    Ok(
        if ctx
            .snapshot()
            .has_capability(capabilities::YUV_REPROCESSING)?
        {
            Outcome::Set(SettingValue::Float(UNITY_EXPOSURE_FACTOR))
        } else {
            Outcome::NotSupported
        },
    )
}

pub fn shading_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::ShadingAvailableModes,
        &[shading::OFF, shading::FAST],
    )
}

pub fn tonemap_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::TonemapAvailableToneMapModes,
        &[tonemap::CONTRAST_CURVE, tonemap::FAST],
    )
}

pub fn tonemap_curve(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if ctx.upstream(Parameter::TonemapMode)?.mode_code() != Some(tonemap::CONTRAST_CURVE.code) {
        return Ok(Outcome::Disabled);
    }
    Ok(Outcome::Set(SettingValue::Curve(TonemapCurve::linear())))
}
