// SPDX-License-Identifier: GPL-3.0-only

//! Selection algorithms shared by the parameter rules
//!
//! - prefer the first supported entry of a fixed preference list
//! - pick a numeric extremum of a supported set
//! - pick the tightest AE target FPS window

use super::context::ResolutionContext;
use crate::characteristics::{CharacteristicKey, ValueRange};
use crate::errors::{ResolveError, ResolveResult};
use crate::metadata::ModeOption;
use crate::settings::{ModeChoice, Outcome, Preference, SettingValue};
use std::cmp::Reverse;

/// First entry of `preference` whose code is in `supported`
pub fn first_supported(supported: &[i32], preference: &[ModeOption]) -> Option<ModeChoice> {
    preference
        .iter()
        .enumerate()
        .find(|(_, option)| supported.contains(&option.code))
        .map(|(rank, option)| {
            ModeChoice::new(*option, Preference::from_rank(rank, preference.len()))
        })
}

/// Resolve a discrete mode from the device list under `key`
///
/// An empty device list is fatal; a list that offers none of the preferred
/// modes leaves the parameter unsupported.
pub fn prefer_first_supported(
    ctx: &ResolutionContext<'_>,
    key: CharacteristicKey,
    preference: &[ModeOption],
) -> ResolveResult<Outcome> {
    let Some(supported) = ctx.snapshot().int_list(key)? else {
        return Ok(Outcome::NotSupported);
    };
    if supported.is_empty() {
        return Err(ResolveError::AmbiguousRange {
            parameter: ctx.parameter(),
            key,
        });
    }

    Ok(match first_supported(supported, preference) {
        Some(choice) => Outcome::Set(SettingValue::Mode(choice)),
        None => Outcome::NotSupported,
    })
}

pub fn minimum(values: &[f32]) -> Option<f32> {
    values.iter().copied().min_by(|a, b| a.total_cmp(b))
}

pub fn maximum(values: &[f32]) -> Option<f32> {
    values.iter().copied().max_by(|a, b| a.total_cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

/// Resolve a float parameter to the min or max of the device list under `key`
pub fn float_extremum(
    ctx: &ResolutionContext<'_>,
    key: CharacteristicKey,
    extremum: Extremum,
) -> ResolveResult<Outcome> {
    let Some(values) = ctx.snapshot().float_list(key)? else {
        return Ok(Outcome::NotSupported);
    };
    let picked = match extremum {
        Extremum::Min => minimum(values),
        Extremum::Max => maximum(values),
    };
    picked
        .map(|v| Outcome::Set(SettingValue::Float(v)))
        .ok_or(ResolveError::AmbiguousRange {
            parameter: ctx.parameter(),
            key,
        })
}

/// Tightest FPS window whose lower bound is at most `max_lower`
///
/// Among equally tight windows the one with the larger upper bound wins, so
/// (24, 24) beats (15, 15).
pub fn tightest_fps_range(ranges: &[ValueRange<i32>], max_lower: i32) -> Option<ValueRange<i32>> {
    ranges
        .iter()
        .filter(|range| range.lower <= max_lower)
        .min_by_key(|range| (range.span(), Reverse(range.upper)))
        .copied()
}
