// SPDX-License-Identifier: GPL-3.0-only

//! Lens parameters

use super::context::ResolutionContext;
use super::select::{Extremum, float_extremum, prefer_first_supported};
use crate::characteristics::CharacteristicKey;
use crate::errors::ResolveResult;
use crate::metadata::optical_stabilization;
use crate::settings::{Outcome, SettingValue};

/// Smallest f-number, unless auto-exposure is choosing the aperture
pub fn aperture(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if ctx.ae_on()? {
        return Ok(Outcome::Disabled);
    }
    float_extremum(
        ctx,
        CharacteristicKey::LensInfoAvailableApertures,
        Extremum::Min,
    )
}

/// Densest neutral density filter
pub fn filter_density(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    float_extremum(
        ctx,
        CharacteristicKey::LensInfoAvailableFilterDensities,
        Extremum::Max,
    )
}

/// Longest focal length
pub fn focal_length(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    float_extremum(
        ctx,
        CharacteristicKey::LensInfoAvailableFocalLengths,
        Extremum::Max,
    )
}

/// Focus at infinity; fixed-focus lenses (minimum distance 0) cannot move
pub fn focus_distance(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    Ok(
        match ctx
            .snapshot()
            .float(CharacteristicKey::LensInfoMinimumFocusDistance)?
        {
            Some(min) if min == 0.0 => Outcome::NotApplicable,
            Some(_) => Outcome::Set(SettingValue::Float(0.0)),
            None => Outcome::NotSupported,
        },
    )
}

pub fn optical_stabilization(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::LensInfoAvailableOpticalStabilization,
        &[optical_stabilization::OFF, optical_stabilization::ON],
    )
}
