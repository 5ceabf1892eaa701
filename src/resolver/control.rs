// SPDX-License-Identifier: GPL-3.0-only

//! Flash, control mode, capture intent and the 3A routines

use super::context::ResolutionContext;
use super::select::{prefer_first_supported, tightest_fps_range};
use crate::characteristics::CharacteristicKey;
use crate::constants::api_level;
use crate::errors::{ResolveError, ResolveResult};
use crate::metadata::{
    ModeOption, ae_antibanding, ae_mode, af_mode, awb_mode, capabilities, capture_intent,
    control_mode, flash_mode, hardware_level,
};
use crate::settings::{Outcome, Parameter, Preference, SettingValue};
use tracing::debug;

pub fn flash_mode(_ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    Ok(Outcome::Set(SettingValue::mode(
        flash_mode::OFF,
        Preference::Preferred,
    )))
}

/// OFF when the device allows it
///
/// Devices below API 23 do not report their control modes; there the
/// hardware level decides.
pub fn control_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if ctx.forced_auto() {
        return Ok(Outcome::Set(SettingValue::mode(
            control_mode::AUTO,
            Preference::Forced,
        )));
    }

    let key = CharacteristicKey::ControlAvailableModes;
    if ctx.config().api_level >= api_level::M && ctx.snapshot().contains(key) {
        return prefer_first_supported(ctx, key, &[control_mode::OFF, control_mode::AUTO]);
    }

    let level = ctx.snapshot().hardware_level()?;
    debug!(
        hardware_level = hardware_level::name(level),
        "Control modes not reported, deciding from hardware level"
    );
    Ok(Outcome::Set(if hardware_level::is_auto_only(level) {
        SettingValue::mode(control_mode::AUTO, Preference::Fallback)
    } else {
        SettingValue::mode(control_mode::OFF, Preference::Preferred)
    }))
}

pub fn capture_intent(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    Ok(Outcome::Set(
        if ctx.snapshot().has_capability(capabilities::MANUAL_SENSOR)? {
            SettingValue::mode(capture_intent::MANUAL, Preference::Preferred)
        } else {
            SettingValue::mode(capture_intent::PREVIEW, Preference::Fallback)
        },
    ))
}

/// Shared shape of the AWB, AF and AE mode rules
fn routine_mode(
    ctx: &ResolutionContext<'_>,
    key: CharacteristicKey,
    off: ModeOption,
    on: ModeOption,
) -> ResolveResult<Outcome> {
    if !ctx.control_mode_auto()? {
        return Ok(Outcome::Disabled);
    }
    if ctx.forced_auto() {
        return Ok(Outcome::Set(SettingValue::mode(on, Preference::Forced)));
    }
    prefer_first_supported(ctx, key, &[off, on])
}

/// Lock value is the device's availability flag, or engaged when unreported
///
/// Lock availability only exists from API 23; older platforms always attempt
/// the lock.
fn lock(ctx: &ResolutionContext<'_>, available: CharacteristicKey) -> ResolveResult<Outcome> {
    if ctx.config().api_level < api_level::M {
        debug!(
            parameter = %ctx.parameter(),
            "Lock availability not reported before API 23, engaging unconfirmed"
        );
        return Ok(Outcome::Set(SettingValue::Flag(true)));
    }
    let engaged = ctx.snapshot().flag(available)?.unwrap_or(true);
    Ok(Outcome::Set(SettingValue::Flag(engaged)))
}

/// Metering regions stay at the device default; zero regions means unsupported
fn regions(ctx: &ResolutionContext<'_>, max_regions: CharacteristicKey) -> ResolveResult<Outcome> {
    Ok(match ctx.snapshot().int(max_regions)? {
        Some(0) => Outcome::NotSupported,
        _ => Outcome::NotApplicable,
    })
}

pub fn not_applicable(_ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    Ok(Outcome::NotApplicable)
}

pub fn awb_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    routine_mode(
        ctx,
        CharacteristicKey::ControlAwbAvailableModes,
        awb_mode::OFF,
        awb_mode::AUTO,
    )
}

pub fn awb_lock(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if !(ctx.control_mode_auto()? && ctx.awb_auto()?) {
        return Ok(Outcome::Disabled);
    }
    lock(ctx, CharacteristicKey::ControlAwbLockAvailable)
}

pub fn awb_regions(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    regions(ctx, CharacteristicKey::ControlMaxRegionsAwb)
}

pub fn af_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    routine_mode(
        ctx,
        CharacteristicKey::ControlAfAvailableModes,
        af_mode::OFF,
        af_mode::AUTO,
    )
}

pub fn af_regions(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    regions(ctx, CharacteristicKey::ControlMaxRegionsAf)
}

pub fn ae_mode(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    routine_mode(
        ctx,
        CharacteristicKey::ControlAeAvailableModes,
        ae_mode::OFF,
        ae_mode::ON,
    )
}

pub fn ae_lock(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if !ctx.auto_exposure()? {
        return Ok(Outcome::Disabled);
    }
    lock(ctx, CharacteristicKey::ControlAeLockAvailable)
}

pub fn ae_regions(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    regions(ctx, CharacteristicKey::ControlMaxRegionsAe)
}

pub fn ae_antibanding(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if !ctx.auto_exposure()? {
        return Ok(Outcome::Disabled);
    }
    prefer_first_supported(
        ctx,
        CharacteristicKey::ControlAeAvailableAntibandingModes,
        &[ae_antibanding::OFF, ae_antibanding::AUTO, ae_antibanding::HZ_60],
    )
}

/// Darkest compensation step; a (0, 0) range leaves compensation unset
pub fn ae_exposure_compensation(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if !ctx.auto_exposure()? {
        return Ok(Outcome::Disabled);
    }
    Ok(
        match ctx
            .snapshot()
            .int_range(CharacteristicKey::ControlAeCompensationRange)?
        {
            Some(range) if range.lower == 0 && range.upper == 0 => Outcome::NotApplicable,
            Some(range) => Outcome::Set(SettingValue::Int(range.lower)),
            None => Outcome::NotSupported,
        },
    )
}

pub fn ae_target_fps_range(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if !ctx.auto_exposure()? {
        return Ok(Outcome::Disabled);
    }
    let key = CharacteristicKey::ControlAeAvailableTargetFpsRanges;
    let Some(ranges) = ctx.snapshot().range_list(key)? else {
        return Ok(Outcome::NotSupported);
    };
    tightest_fps_range(ranges, ctx.config().max_fps_lower_bound)
        .map(|range| Outcome::Set(SettingValue::FpsRange(range)))
        .ok_or(ResolveError::AmbiguousRange {
            parameter: Parameter::AeTargetFpsRange,
            key,
        })
}
