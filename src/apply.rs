// SPDX-License-Identifier: GPL-3.0-only

//! Apply phase
//!
//! Resolution is pure; this is the one place resolved values are written
//! into something that drives the device.

use crate::settings::{Parameter, ResolvedSettings, SettingValue};
use serde::Serialize;
use tracing::debug;

/// Receiver of resolved values (a native capture request builder)
pub trait RequestSink {
    fn set(&mut self, parameter: Parameter, value: &SettingValue);
}

/// Write every entry that carries a value, in resolution order
///
/// Unsupported, disabled and not-applicable entries are skipped so the
/// device keeps its own default for them. Returns the number of writes.
pub fn apply_settings<S: RequestSink + ?Sized>(settings: &ResolvedSettings, sink: &mut S) -> usize {
    let mut written = 0;
    for entry in settings {
        if let Some(value) = entry.value() {
            sink.set(entry.parameter, value);
            written += 1;
        }
    }
    debug!(written, skipped = settings.len() - written, "Applied resolved settings");
    written
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestField {
    pub key: Parameter,
    pub value: SettingValue,
}

/// In-memory capture request
///
/// Keeps writes in arrival order; a repeated key replaces the earlier value
/// in place, as a native builder would.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CaptureRequestBuilder {
    fields: Vec<RequestField>,
}

impl CaptureRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, parameter: Parameter) -> Option<&SettingValue> {
        self.fields
            .iter()
            .find(|field| field.key == parameter)
            .map(|field| &field.value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.fields.iter().map(|field| field.key)
    }
}

impl RequestSink for CaptureRequestBuilder {
    fn set(&mut self, parameter: Parameter, value: &SettingValue) {
        match self.fields.iter_mut().find(|field| field.key == parameter) {
            Some(field) => field.value = value.clone(),
            None => self.fields.push(RequestField {
                key: parameter,
                value: value.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::flash_mode;
    use crate::settings::{Outcome, Preference};

    #[test]
    fn test_only_set_outcomes_are_written() {
        let mut settings = ResolvedSettings::new();
        settings
            .insert(
                Parameter::FlashMode,
                Outcome::Set(SettingValue::mode(flash_mode::OFF, Preference::Preferred)),
            )
            .unwrap();
        settings.insert(Parameter::AwbLock, Outcome::Disabled).unwrap();
        settings.insert(Parameter::AfTrigger, Outcome::NotApplicable).unwrap();
        settings.insert(Parameter::LensAperture, Outcome::NotSupported).unwrap();

        let mut request = CaptureRequestBuilder::new();
        assert_eq!(apply_settings(&settings, &mut request), 1);
        assert_eq!(request.keys().collect::<Vec<_>>(), vec![Parameter::FlashMode]);
        assert_eq!(request.get(Parameter::AwbLock), None);
    }

    #[test]
    fn test_repeated_write_replaces_value() {
        let mut request = CaptureRequestBuilder::new();
        request.set(Parameter::SensorSensitivity, &SettingValue::Int(100));
        request.set(Parameter::SensorSensitivity, &SettingValue::Int(3200));
        assert_eq!(request.len(), 1);
        assert_eq!(
            request.get(Parameter::SensorSensitivity),
            Some(&SettingValue::Int(3200))
        );
    }
}
