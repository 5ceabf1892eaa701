// SPDX-License-Identifier: GPL-3.0-only

//! Resolved values and per-parameter outcomes

use crate::characteristics::ValueRange;
use crate::metadata::ModeOption;
use serde::Serialize;

/// Where a chosen mode sat in its fixed preference list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// First entry of the list
    Preferred,
    /// Any later entry that is not the last of a list of three or more
    Fallback,
    /// Last entry of a list of three or more
    LastChoice,
    /// Overridden by configuration, not chosen from the device list
    Forced,
}

impl Preference {
    /// Annotation for a choice at `rank` (0-based) in a list of `len`
    pub fn from_rank(rank: usize, len: usize) -> Self {
        if rank == 0 {
            Preference::Preferred
        } else if len >= 3 && rank + 1 == len {
            Preference::LastChoice
        } else {
            Preference::Fallback
        }
    }

    pub fn annotation(self) -> &'static str {
        match self {
            Preference::Preferred => "PREFERRED",
            Preference::Fallback => "FALLBACK",
            Preference::LastChoice => "LAST CHOICE",
            Preference::Forced => "FORCED",
        }
    }
}

/// A discrete mode together with how it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeChoice {
    #[serde(flatten)]
    pub option: ModeOption,
    pub preference: Preference,
}

impl ModeChoice {
    pub fn new(option: ModeOption, preference: Preference) -> Self {
        Self { option, preference }
    }

    pub fn code(&self) -> i32 {
        self.option.code
    }
}

/// Per-channel white balance gains (R, G_even, G_odd, B)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RggbGains {
    pub red: f32,
    pub green_even: f32,
    pub green_odd: f32,
    pub blue: f32,
}

impl RggbGains {
    pub const UNITY: RggbGains = RggbGains {
        red: 1.0,
        green_even: 1.0,
        green_odd: 1.0,
        blue: 1.0,
    };

    pub fn is_unity(&self) -> bool {
        *self == Self::UNITY
    }
}

/// Row-major 3x3 color transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorTransform(pub [[f32; 3]; 3]);

impl ColorTransform {
    pub const IDENTITY: ColorTransform =
        ColorTransform([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Tonemap control points `(input, output)` in `[0, 1]`, shared by all channels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TonemapCurve {
    pub points: Vec<(f32, f32)>,
}

impl TonemapCurve {
    pub fn linear() -> Self {
        Self {
            points: vec![(0.0, 0.0), (1.0, 1.0)],
        }
    }

    pub fn is_linear(&self) -> bool {
        self.points == [(0.0, 0.0), (1.0, 1.0)]
    }
}

/// Concrete value written to a capture request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Mode(ModeChoice),
    Flag(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    FpsRange(ValueRange<i32>),
    Gains(RggbGains),
    Transform(ColorTransform),
    Curve(TonemapCurve),
}

impl SettingValue {
    pub fn mode(option: ModeOption, preference: Preference) -> Self {
        SettingValue::Mode(ModeChoice::new(option, preference))
    }

    /// Mode code when this is a discrete mode
    pub fn mode_code(&self) -> Option<i32> {
        match self {
            SettingValue::Mode(choice) => Some(choice.code()),
            _ => None,
        }
    }
}

/// Result of resolving one parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// A value to apply
    Set(SettingValue),
    /// The device cannot set this parameter
    NotSupported,
    /// Settable, but an upstream decision makes it moot
    Disabled,
    /// Settable, but intentionally left at the device default
    NotApplicable,
}

impl Outcome {
    pub fn value(&self) -> Option<&SettingValue> {
        match self {
            Outcome::Set(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Outcome::Set(_))
    }

    pub fn mode_code(&self) -> Option<i32> {
        self.value().and_then(SettingValue::mode_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ae_mode;

    #[test]
    fn test_preference_from_rank() {
        assert_eq!(Preference::from_rank(0, 1), Preference::Preferred);
        assert_eq!(Preference::from_rank(0, 3), Preference::Preferred);
        assert_eq!(Preference::from_rank(1, 2), Preference::Fallback);
        assert_eq!(Preference::from_rank(1, 3), Preference::Fallback);
        assert_eq!(Preference::from_rank(2, 3), Preference::LastChoice);
    }

    #[test]
    fn test_outcome_mode_code() {
        let outcome = Outcome::Set(SettingValue::mode(ae_mode::OFF, Preference::Preferred));
        assert_eq!(outcome.mode_code(), Some(ae_mode::OFF.code));
        assert_eq!(Outcome::Disabled.mode_code(), None);
    }

    #[test]
    fn test_constants() {
        assert!(RggbGains::UNITY.is_unity());
        assert!(ColorTransform::IDENTITY.is_identity());
        assert!(TonemapCurve::linear().is_linear());
    }
}
