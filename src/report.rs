// SPDX-License-Identifier: GPL-3.0-only

//! Human-readable report of resolved settings
//!
//! Labels are computed from the stored outcome alone, so the report cannot
//! say anything the apply phase did not write.

use crate::settings::{Outcome, Parameter, ResolvedSettings, SettingValue};

pub const NOT_SUPPORTED: &str = "NOT SUPPORTED";
pub const DISABLED: &str = "Disabled";
pub const NOT_APPLICABLE: &str = "NOT APPLICABLE";

/// Label for one parameter's outcome
pub fn format_label(parameter: Parameter, outcome: &Outcome) -> String {
    match outcome {
        Outcome::NotSupported => NOT_SUPPORTED.to_string(),
        Outcome::Disabled => DISABLED.to_string(),
        Outcome::NotApplicable => NOT_APPLICABLE.to_string(),
        Outcome::Set(value) => format_value(parameter, value),
    }
}

fn format_value(parameter: Parameter, value: &SettingValue) -> String {
    match value {
        SettingValue::Mode(choice) => {
            format!("{} ({})", choice.option.name, choice.preference.annotation())
        }
        SettingValue::Flag(on) => match (parameter.is_lock(), on) {
            (true, true) => "Engaged".to_string(),
            (true, false) => "Open".to_string(),
            (false, true) => "ON".to_string(),
            (false, false) => "OFF".to_string(),
        },
        SettingValue::Int(v) => match parameter {
            Parameter::SensorSensitivity => format!("ISO {}", v),
            Parameter::AeExposureCompensation => format!("{} steps", v),
            Parameter::PostRawSensitivityBoost => format!("{} ISO units", v),
            _ => v.to_string(),
        },
        SettingValue::Long(v) => match parameter {
            Parameter::SensorExposureTime | Parameter::SensorFrameDuration => {
                format!("{} ns", group_thousands(*v))
            }
            _ => group_thousands(*v),
        },
        SettingValue::Float(v) => match parameter {
            Parameter::LensAperture => format!("f/{}", v),
            Parameter::LensFocalLength => format!("{} mm", v),
            Parameter::LensFilterDensity => format!("{} EV", v),
            Parameter::LensFocusDistance if *v == 0.0 => "INFINITY".to_string(),
            Parameter::LensFocusDistance => format!("{} diopters", v),
            Parameter::ReprocessEffectiveExposureFactor => format!("{}x", v),
            _ => v.to_string(),
        },
        SettingValue::FpsRange(range) => format!("{} fps", range),
        SettingValue::Gains(gains) if gains.is_unity() => "UNITY".to_string(),
        SettingValue::Gains(gains) => format!(
            "R {} / G {} / G {} / B {}",
            gains.red, gains.green_even, gains.green_odd, gains.blue
        ),
        SettingValue::Transform(transform) if transform.is_identity() => "IDENTITY".to_string(),
        SettingValue::Transform(_) => "CUSTOM MATRIX".to_string(),
        SettingValue::Curve(curve) if curve.is_linear() => "LINEAR".to_string(),
        SettingValue::Curve(curve) => format!("{} control points", curve.points.len()),
    }
}

/// `1000000000` -> `1,000,000,000`
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Renders resolved settings as `<display name>: <label>` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    show_key_names: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the platform request key after each display name
    pub fn with_key_names(mut self, show: bool) -> Self {
        self.show_key_names = show;
        self
    }

    /// One line per entry, in resolution order
    pub fn lines(&self, settings: &ResolvedSettings) -> Vec<String> {
        settings
            .iter()
            .map(|entry| {
                if self.show_key_names {
                    format!(
                        "{} [{}]: {}",
                        entry.parameter.display_name(),
                        entry.parameter.key_name(),
                        entry.label()
                    )
                } else {
                    format!("{}: {}", entry.parameter.display_name(), entry.label())
                }
            })
            .collect()
    }

    pub fn render(&self, settings: &ResolvedSettings) -> String {
        let mut out = self.lines(settings).join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::ValueRange;
    use crate::metadata::ae_antibanding;
    use crate::settings::Preference;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_000_000_000), "1,000,000,000");
        assert_eq!(group_thousands(-12_345), "-12,345");
    }

    #[test]
    fn test_mode_label_carries_preference_rank() {
        let outcome = Outcome::Set(SettingValue::mode(
            ae_antibanding::HZ_60,
            Preference::LastChoice,
        ));
        assert_eq!(
            format_label(Parameter::AeAntibandingMode, &outcome),
            "60HZ (LAST CHOICE)"
        );
    }

    #[test]
    fn test_sentinel_labels() {
        assert_eq!(format_label(Parameter::FlashMode, &Outcome::NotSupported), "NOT SUPPORTED");
        assert_eq!(format_label(Parameter::AwbLock, &Outcome::Disabled), "Disabled");
        assert_eq!(
            format_label(Parameter::AfTrigger, &Outcome::NotApplicable),
            "NOT APPLICABLE"
        );
    }

    #[test]
    fn test_value_labels() {
        let set = |v| Outcome::Set(v);
        assert_eq!(format_label(Parameter::AeLock, &set(SettingValue::Flag(true))), "Engaged");
        assert_eq!(format_label(Parameter::AwbLock, &set(SettingValue::Flag(false))), "Open");
        assert_eq!(format_label(Parameter::EnableZsl, &set(SettingValue::Flag(false))), "OFF");
        assert_eq!(
            format_label(Parameter::SensorExposureTime, &set(SettingValue::Long(1000))),
            "1,000 ns"
        );
        assert_eq!(format_label(Parameter::LensAperture, &set(SettingValue::Float(1.8))), "f/1.8");
        assert_eq!(
            format_label(Parameter::LensFocusDistance, &set(SettingValue::Float(0.0))),
            "INFINITY"
        );
        assert_eq!(
            format_label(
                Parameter::AeTargetFpsRange,
                &set(SettingValue::FpsRange(ValueRange::new(24, 24)))
            ),
            "[24, 24] fps"
        );
    }
}
