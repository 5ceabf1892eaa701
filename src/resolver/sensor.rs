// SPDX-License-Identifier: GPL-3.0-only

//! Manual sensor exposure
//!
//! These only apply while auto-exposure is not running: control mode not
//! AUTO, or AE not ON.

use super::context::ResolutionContext;
use super::select::prefer_first_supported;
use crate::characteristics::{CharacteristicKey, StreamDuration};
use crate::errors::{ResolveError, ResolveResult};
use crate::metadata::{image_format, test_pattern};
use crate::settings::{Outcome, SettingValue};
use tracing::debug;

/// Maximum analog plus digital gain
pub fn sensitivity(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if ctx.auto_exposure()? {
        return Ok(Outcome::Disabled);
    }
    Ok(
        match ctx
            .snapshot()
            .int_range(CharacteristicKey::SensorInfoSensitivityRange)?
        {
            Some(range) => Outcome::Set(SettingValue::Int(range.upper)),
            None => Outcome::NotSupported,
        },
    )
}

/// Shortest exposure
pub fn exposure_time(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if ctx.auto_exposure()? {
        return Ok(Outcome::Disabled);
    }
    Ok(
        match ctx
            .snapshot()
            .long_range(CharacteristicKey::SensorInfoExposureTimeRange)?
        {
            Some(range) => Outcome::Set(SettingValue::Long(range.lower)),
            None => Outcome::NotSupported,
        },
    )
}

/// Minimum frame duration of the largest stream in `format`
pub fn min_frame_duration(rows: &[StreamDuration], format: i32) -> Option<i64> {
    let largest = rows
        .iter()
        .filter(|row| row.format == format)
        .map(|row| row.size().area())
        .max()?;
    rows.iter()
        .filter(|row| row.format == format && row.size().area() == largest)
        .map(|row| row.duration_ns)
        .min()
}

/// Fastest frame the configured output stream allows
pub fn frame_duration(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    if ctx.auto_exposure()? {
        return Ok(Outcome::Disabled);
    }
    let Some(rows) = ctx.snapshot().stream_durations()? else {
        return Ok(Outcome::NotSupported);
    };
    let format = ctx.output_format()?;
    let duration = min_frame_duration(rows, format).ok_or(ResolveError::AmbiguousRange {
        parameter: ctx.parameter(),
        key: CharacteristicKey::ScalerAvailableMinFrameDurations,
    })?;

    debug!(
        format = image_format::name(format),
        duration_ns = duration,
        "Frame duration from output stream"
    );
    Ok(Outcome::Set(SettingValue::Long(duration)))
}

pub fn test_pattern(ctx: &ResolutionContext<'_>) -> ResolveResult<Outcome> {
    prefer_first_supported(
        ctx,
        CharacteristicKey::SensorAvailableTestPatternModes,
        &[test_pattern::OFF],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(format: i32, width: u32, height: u32, duration_ns: i64) -> StreamDuration {
        StreamDuration {
            format,
            width,
            height,
            duration_ns,
        }
    }

    #[test]
    fn test_min_frame_duration_uses_largest_stream_of_format() {
        let rows = [
            row(image_format::RAW_SENSOR, 4032, 3024, 50_000_000),
            row(image_format::RAW_SENSOR, 1920, 1080, 16_666_666),
            row(image_format::YUV_420_888, 4032, 3024, 33_333_333),
            row(image_format::RAW_SENSOR, 4032, 3024, 40_000_000),
        ];
        assert_eq!(
            min_frame_duration(&rows, image_format::RAW_SENSOR),
            Some(40_000_000)
        );
        assert_eq!(
            min_frame_duration(&rows, image_format::YUV_420_888),
            Some(33_333_333)
        );
    }

    #[test]
    fn test_min_frame_duration_without_format() {
        let rows = [row(image_format::YUV_420_888, 640, 480, 33_333_333)];
        assert_eq!(min_frame_duration(&rows, image_format::RAW_SENSOR), None);
    }
}
