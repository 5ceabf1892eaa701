// SPDX-License-Identifier: GPL-3.0-only

//! Device capability snapshot
//!
//! A [`CapabilitySnapshot`] is the read-only description of what one physical
//! camera supports. It is built once (from a JSON dump of the device's
//! characteristics, or programmatically in tests) and then only read.

mod keys;
mod values;

pub use keys::{CharacteristicKey, ValueKind};
pub use values::{CapabilityValue, Size, StreamDuration, ValueRange};

use crate::errors::{ResolveError, ResolveResult, SnapshotError};
use crate::metadata::capabilities;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// On-disk form of a snapshot
#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    camera_id: String,
    #[serde(default)]
    characteristics: serde_json::Map<String, serde_json::Value>,
}

/// Immutable per-device capability description
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CapabilitySnapshot {
    camera_id: String,
    entries: BTreeMap<CharacteristicKey, CapabilityValue>,
}

impl CapabilitySnapshot {
    /// Empty snapshot for the given camera
    pub fn new(camera_id: impl Into<String>) -> Self {
        Self {
            camera_id: camera_id.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace a capability (builder style)
    ///
    /// No shape check is done here; a mismatched value or an inverted range
    /// surfaces as [`ResolveError::MalformedCapability`] when it is read.
    pub fn with(mut self, key: CharacteristicKey, value: CapabilityValue) -> Self {
        self.entries.insert(key, value);
        self
    }

    /// Remove a capability (builder style)
    pub fn without(mut self, key: CharacteristicKey) -> Self {
        self.entries.remove(&key);
        self
    }

    /// Parse a snapshot document
    ///
    /// Keys outside the known vocabulary are skipped with a warning, since the
    /// platform adds keys over time.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument = serde_json::from_str(json)?;
        let mut snapshot = Self::new(document.camera_id);

        for (name, raw) in document.characteristics {
            let key = match name.parse::<CharacteristicKey>() {
                Ok(key) => key,
                Err(_) => {
                    warn!(
                        camera_id = %snapshot.camera_id,
                        key = %name,
                        "Ignoring unknown capability key"
                    );
                    continue;
                }
            };
            let value = CapabilityValue::from_json(key, raw)?;
            snapshot.entries.insert(key, value);
        }

        debug!(
            camera_id = %snapshot.camera_id,
            key_count = snapshot.entries.len(),
            "Loaded capability snapshot"
        );
        Ok(snapshot)
    }

    /// Read and parse a snapshot file
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| SnapshotError::Parse(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn camera_id(&self) -> &str {
        &self.camera_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: CharacteristicKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn get(&self, key: CharacteristicKey) -> Option<&CapabilityValue> {
        self.entries.get(&key)
    }

    /// Reported capabilities in vocabulary order
    pub fn iter(&self) -> impl Iterator<Item = (CharacteristicKey, &CapabilityValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Fail on the first mandatory key the device did not report
    pub fn validate_mandatory(&self) -> ResolveResult<()> {
        match CharacteristicKey::MANDATORY
            .iter()
            .find(|key| !self.contains(**key))
        {
            Some(key) => Err(ResolveError::MissingMandatoryCapability(*key)),
            None => Ok(()),
        }
    }

    fn typed<'a, T>(
        &'a self,
        key: CharacteristicKey,
        pick: impl FnOnce(&'a CapabilityValue) -> Option<T>,
    ) -> ResolveResult<Option<T>> {
        match self.entries.get(&key) {
            None => Ok(None),
            Some(value) => pick(value).map(Some).ok_or(ResolveError::MalformedCapability {
                key,
                expected: key.kind(),
            }),
        }
    }

    pub fn flag(&self, key: CharacteristicKey) -> ResolveResult<Option<bool>> {
        self.typed(key, |value| match value {
            CapabilityValue::Bool(v) => Some(*v),
            _ => None,
        })
    }

    pub fn int(&self, key: CharacteristicKey) -> ResolveResult<Option<i32>> {
        self.typed(key, |value| match value {
            CapabilityValue::Int(v) => Some(*v),
            _ => None,
        })
    }

    pub fn long(&self, key: CharacteristicKey) -> ResolveResult<Option<i64>> {
        self.typed(key, |value| match value {
            CapabilityValue::Long(v) => Some(*v),
            _ => None,
        })
    }

    pub fn float(&self, key: CharacteristicKey) -> ResolveResult<Option<f32>> {
        self.typed(key, |value| match value {
            CapabilityValue::Float(v) => Some(*v),
            _ => None,
        })
    }

    pub fn int_list(&self, key: CharacteristicKey) -> ResolveResult<Option<&[i32]>> {
        self.typed(key, |value| match value {
            CapabilityValue::IntList(v) => Some(v.as_slice()),
            _ => None,
        })
    }

    pub fn float_list(&self, key: CharacteristicKey) -> ResolveResult<Option<&[f32]>> {
        self.typed(key, |value| match value {
            CapabilityValue::FloatList(v) => Some(v.as_slice()),
            _ => None,
        })
    }

    pub fn bool_list(&self, key: CharacteristicKey) -> ResolveResult<Option<&[bool]>> {
        self.typed(key, |value| match value {
            CapabilityValue::BoolList(v) => Some(v.as_slice()),
            _ => None,
        })
    }

    pub fn int_range(&self, key: CharacteristicKey) -> ResolveResult<Option<ValueRange<i32>>> {
        self.typed(key, |value| match value {
            CapabilityValue::IntRange(r) if r.is_ordered() => Some(*r),
            _ => None,
        })
    }

    pub fn long_range(&self, key: CharacteristicKey) -> ResolveResult<Option<ValueRange<i64>>> {
        self.typed(key, |value| match value {
            CapabilityValue::LongRange(r) if r.is_ordered() => Some(*r),
            _ => None,
        })
    }

    pub fn range_list(&self, key: CharacteristicKey) -> ResolveResult<Option<&[ValueRange<i32>]>> {
        self.typed(key, |value| match value {
            CapabilityValue::RangeList(v) if v.iter().all(ValueRange::is_ordered) => {
                Some(v.as_slice())
            }
            _ => None,
        })
    }

    pub fn size(&self, key: CharacteristicKey) -> ResolveResult<Option<Size>> {
        self.typed(key, |value| match value {
            CapabilityValue::Size(s) => Some(*s),
            _ => None,
        })
    }

    pub fn request_keys(&self) -> ResolveResult<Option<&[String]>> {
        self.typed(CharacteristicKey::RequestAvailableRequestKeys, |value| {
            match value {
                CapabilityValue::KeyList(v) => Some(v.as_slice()),
                _ => None,
            }
        })
    }

    pub fn stream_durations(&self) -> ResolveResult<Option<&[StreamDuration]>> {
        self.typed(CharacteristicKey::ScalerAvailableMinFrameDurations, |value| {
            match value {
                CapabilityValue::StreamDurations(v) => Some(v.as_slice()),
                _ => None,
            }
        })
    }

    /// Hardware support level (mandatory)
    pub fn hardware_level(&self) -> ResolveResult<i32> {
        self.int(CharacteristicKey::InfoSupportedHardwareLevel)?
            .ok_or(ResolveError::MissingMandatoryCapability(
                CharacteristicKey::InfoSupportedHardwareLevel,
            ))
    }

    /// Whether `REQUEST_AVAILABLE_CAPABILITIES` lists `capability`
    pub fn has_capability(&self, capability: i32) -> ResolveResult<bool> {
        let advertised = self
            .int_list(CharacteristicKey::RequestAvailableCapabilities)?
            .ok_or(ResolveError::MissingMandatoryCapability(
                CharacteristicKey::RequestAvailableCapabilities,
            ))?;
        Ok(advertised.contains(&capability))
    }

    /// Whether the device can deliver RAW_SENSOR output
    pub fn supports_raw(&self) -> ResolveResult<bool> {
        self.has_capability(capabilities::RAW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "camera_id": "0",
        "characteristics": {
            "INFO_SUPPORTED_HARDWARE_LEVEL": 1,
            "SENSOR_INFO_PIXEL_ARRAY_SIZE": [4032, 3024],
            "REQUEST_AVAILABLE_CAPABILITIES": [0, 1, 3],
            "CONTROL_AE_AVAILABLE_MODES": [0, 1, 2],
            "ANDROID_VENDOR_SPECIFIC_THING": 7
        }
    }"#;

    #[test]
    fn test_unknown_keys_are_skipped() {
        let snapshot = CapabilitySnapshot::from_json_str(MINIMAL).unwrap();
        assert_eq!(snapshot.camera_id(), "0");
        assert_eq!(snapshot.len(), 4, "vendor key should not be stored");
        assert!(snapshot.contains(CharacteristicKey::ControlAeAvailableModes));
    }

    #[test]
    fn test_validate_mandatory_reports_first_missing_key() {
        let snapshot = CapabilitySnapshot::from_json_str(MINIMAL)
            .unwrap()
            .without(CharacteristicKey::SensorInfoPixelArraySize);
        assert_eq!(
            snapshot.validate_mandatory(),
            Err(ResolveError::MissingMandatoryCapability(
                CharacteristicKey::SensorInfoPixelArraySize
            ))
        );
    }

    #[test]
    fn test_typed_read_of_wrong_shape_is_malformed() {
        let snapshot = CapabilitySnapshot::new("0").with(
            CharacteristicKey::LensInfoAvailableApertures,
            CapabilityValue::Int(2),
        );
        assert_eq!(
            snapshot.float_list(CharacteristicKey::LensInfoAvailableApertures),
            Err(ResolveError::MalformedCapability {
                key: CharacteristicKey::LensInfoAvailableApertures,
                expected: ValueKind::FloatList,
            })
        );
    }

    #[test]
    fn test_inverted_range_from_builder_is_malformed() {
        let snapshot = CapabilitySnapshot::new("0")
            .with(
                CharacteristicKey::ControlPostRawSensitivityBoostRange,
                CapabilityValue::IntRange(ValueRange::new(3199, 100)),
            )
            .with(
                CharacteristicKey::SensorInfoExposureTimeRange,
                CapabilityValue::LongRange(ValueRange::new(1_000_000_000, 1000)),
            )
            .with(
                CharacteristicKey::ControlAeAvailableTargetFpsRanges,
                CapabilityValue::RangeList(vec![ValueRange::new(15, 15), ValueRange::new(30, 5)]),
            );
        assert_eq!(
            snapshot.int_range(CharacteristicKey::ControlPostRawSensitivityBoostRange),
            Err(ResolveError::MalformedCapability {
                key: CharacteristicKey::ControlPostRawSensitivityBoostRange,
                expected: ValueKind::IntRange,
            })
        );
        assert!(snapshot
            .long_range(CharacteristicKey::SensorInfoExposureTimeRange)
            .is_err());
        assert!(snapshot
            .range_list(CharacteristicKey::ControlAeAvailableTargetFpsRanges)
            .is_err());
    }

    #[test]
    fn test_absent_key_reads_as_none() {
        let snapshot = CapabilitySnapshot::new("0");
        assert_eq!(
            snapshot.flag(CharacteristicKey::FlashInfoAvailable),
            Ok(None)
        );
    }

    #[test]
    fn test_capability_lookup() {
        let snapshot = CapabilitySnapshot::from_json_str(MINIMAL).unwrap();
        assert_eq!(snapshot.supports_raw(), Ok(true));
        assert_eq!(snapshot.has_capability(capabilities::YUV_REPROCESSING), Ok(false));
        assert_eq!(snapshot.hardware_level(), Ok(1));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            CapabilitySnapshot::from_json_str("{\"characteristics\": {}}"),
            Err(SnapshotError::Parse(_))
        ));
    }
}
