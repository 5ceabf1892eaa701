// SPDX-License-Identifier: GPL-3.0-only

//! Statistics the device attaches to capture results

use super::context::ResolutionContext;
use super::select::{first_supported, prefer_first_supported};
use crate::characteristics::CharacteristicKey;
use crate::errors::{ResolveError, ResolveResult};
use crate::metadata::{face_detect, hot_pixel_map, lens_shading_map, ois_data};
use crate::settings::{Outcome, SettingValue};

pub fn face_detect(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::StatisticsInfoAvailableFaceDetectModes,
        &[face_detect::OFF, face_detect::SIMPLE, face_detect::FULL],
    )
}

/// The device reports this one as a list of booleans
pub fn hot_pixel_map(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    let key = CharacteristicKey::StatisticsInfoAvailableHotPixelMapModes;
    let Some(supported) = ctx.snapshot().bool_list(key)? else {
        return Ok(Outcome::NotSupported);
    };
    if supported.is_empty() {
        return Err(ResolveError::AmbiguousRange {
            parameter: ctx.parameter(),
            key,
        });
    }

    let codes: Vec<i32> = supported.iter().map(|on| i32::from(*on)).collect();
    Ok(
        match first_supported(&codes, &[hot_pixel_map::OFF, hot_pixel_map::ON]) {
            Some(choice) => Outcome::Set(SettingValue::Mode(choice)),
            None => Outcome::NotSupported,
        },
    )
}

pub fn lens_shading_map(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::StatisticsInfoAvailableLensShadingMapModes,
        &[lens_shading_map::OFF, lens_shading_map::ON],
    )
}

pub fn ois_data(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::StatisticsInfoAvailableOisDataModes,
        &[ois_data::OFF, ois_data::ON],
    )
}
