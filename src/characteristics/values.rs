// SPDX-License-Identifier: GPL-3.0-only

//! Typed capability values
//!
//! A snapshot stores one [`CapabilityValue`] per reported key. The JSON form
//! of each value is decided by the key's [`ValueKind`], so a value of the
//! wrong shape is rejected while the snapshot is loaded rather than when a
//! resolver first reads it.

use super::keys::{CharacteristicKey, ValueKind};
use crate::errors::SnapshotError;
use crate::metadata::image_format;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed numeric interval `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueRange<T> {
    pub lower: T,
    pub upper: T,
}

impl<T: Copy + PartialOrd> ValueRange<T> {
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// `lower <= upper`; inverted ranges are unusable
    pub fn is_ordered(&self) -> bool {
        self.lower <= self.upper
    }
}

impl ValueRange<i32> {
    /// Width of the window (upper - lower)
    pub fn span(&self) -> i64 {
        i64::from(self.upper) - i64::from(self.lower)
    }
}

impl<T: fmt::Display> fmt::Display for ValueRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// One row of the scaler's minimum frame duration table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDuration {
    /// `ImageFormat` code of the output stream
    pub format: i32,
    pub width: u32,
    pub height: u32,
    pub duration_ns: i64,
}

impl StreamDuration {
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// A capability value as reported by the device
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CapabilityValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    IntList(Vec<i32>),
    FloatList(Vec<f32>),
    BoolList(Vec<bool>),
    IntRange(ValueRange<i32>),
    LongRange(ValueRange<i64>),
    RangeList(Vec<ValueRange<i32>>),
    Size(Size),
    KeyList(Vec<String>),
    StreamDurations(Vec<StreamDuration>),
}

impl CapabilityValue {
    /// Shape of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            CapabilityValue::Bool(_) => ValueKind::Bool,
            CapabilityValue::Int(_) => ValueKind::Int,
            CapabilityValue::Long(_) => ValueKind::Long,
            CapabilityValue::Float(_) => ValueKind::Float,
            CapabilityValue::IntList(_) => ValueKind::IntList,
            CapabilityValue::FloatList(_) => ValueKind::FloatList,
            CapabilityValue::BoolList(_) => ValueKind::BoolList,
            CapabilityValue::IntRange(_) => ValueKind::IntRange,
            CapabilityValue::LongRange(_) => ValueKind::LongRange,
            CapabilityValue::RangeList(_) => ValueKind::RangeList,
            CapabilityValue::Size(_) => ValueKind::Size,
            CapabilityValue::KeyList(_) => ValueKind::KeyList,
            CapabilityValue::StreamDurations(_) => ValueKind::StreamDurations,
        }
    }

    /// Parse the JSON form of a value for `key`
    pub fn from_json(
        key: CharacteristicKey,
        raw: serde_json::Value,
    ) -> Result<Self, SnapshotError> {
        let invalid = |reason: String| SnapshotError::InvalidValue { key, reason };
        let parse = |e: serde_json::Error| invalid(e.to_string());

        let value = match key.kind() {
            ValueKind::Bool => CapabilityValue::Bool(serde_json::from_value(raw).map_err(parse)?),
            ValueKind::Int => CapabilityValue::Int(serde_json::from_value(raw).map_err(parse)?),
            ValueKind::Long => CapabilityValue::Long(serde_json::from_value(raw).map_err(parse)?),
            ValueKind::Float => {
                CapabilityValue::Float(serde_json::from_value(raw).map_err(parse)?)
            }
            ValueKind::IntList => {
                CapabilityValue::IntList(serde_json::from_value(raw).map_err(parse)?)
            }
            ValueKind::FloatList => {
                CapabilityValue::FloatList(serde_json::from_value(raw).map_err(parse)?)
            }
            ValueKind::BoolList => {
                CapabilityValue::BoolList(serde_json::from_value(raw).map_err(parse)?)
            }
            ValueKind::IntRange => {
                let [lower, upper]: [i32; 2] = serde_json::from_value(raw).map_err(parse)?;
                CapabilityValue::IntRange(checked_range(lower, upper).map_err(invalid)?)
            }
            ValueKind::LongRange => {
                let [lower, upper]: [i64; 2] = serde_json::from_value(raw).map_err(parse)?;
                CapabilityValue::LongRange(checked_range(lower, upper).map_err(invalid)?)
            }
            ValueKind::RangeList => {
                let pairs: Vec<[i32; 2]> = serde_json::from_value(raw).map_err(parse)?;
                let ranges = pairs
                    .into_iter()
                    .map(|[lower, upper]| checked_range(lower, upper))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(invalid)?;
                CapabilityValue::RangeList(ranges)
            }
            ValueKind::Size => {
                let [width, height]: [u32; 2] = serde_json::from_value(raw).map_err(parse)?;
                CapabilityValue::Size(Size { width, height })
            }
            ValueKind::KeyList => {
                CapabilityValue::KeyList(serde_json::from_value(raw).map_err(parse)?)
            }
            ValueKind::StreamDurations => {
                let rows: Vec<StreamDuration> = serde_json::from_value(raw).map_err(parse)?;
                if let Some(row) = rows.iter().find(|row| row.duration_ns < 0) {
                    return Err(invalid(format!(
                        "negative duration {} for {}x{}",
                        row.duration_ns, row.width, row.height
                    )));
                }
                CapabilityValue::StreamDurations(rows)
            }
        };

        Ok(value)
    }
}

fn checked_range<T>(lower: T, upper: T) -> Result<ValueRange<T>, String>
where
    T: Copy + PartialOrd + fmt::Display,
{
    let range = ValueRange::new(lower, upper);
    if !range.is_ordered() {
        return Err(format!("range lower bound {} exceeds upper bound {}", lower, upper));
    }
    Ok(range)
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

impl fmt::Display for CapabilityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityValue::Bool(v) => write!(f, "{}", v),
            CapabilityValue::Int(v) => write!(f, "{}", v),
            CapabilityValue::Long(v) => write!(f, "{}", v),
            CapabilityValue::Float(v) => write!(f, "{}", v),
            CapabilityValue::IntList(v) => write_list(f, v),
            CapabilityValue::FloatList(v) => write_list(f, v),
            CapabilityValue::BoolList(v) => write_list(f, v),
            CapabilityValue::IntRange(r) => write!(f, "{}", r),
            CapabilityValue::LongRange(r) => write!(f, "{}", r),
            CapabilityValue::RangeList(v) => write_list(f, v),
            CapabilityValue::Size(s) => write!(f, "{}x{}", s.width, s.height),
            CapabilityValue::KeyList(v) => write!(f, "{} request keys", v.len()),
            CapabilityValue::StreamDurations(rows) => {
                let mut formats: Vec<&str> = rows
                    .iter()
                    .map(|row| image_format::name(row.format))
                    .collect();
                formats.sort_unstable();
                formats.dedup();
                write!(f, "{} stream configurations", rows.len())?;
                if !formats.is_empty() {
                    write!(f, " ({})", formats.join(", "))?;
                }
                Ok(())
            }
        }
    }
}
