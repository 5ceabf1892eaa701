// SPDX-License-Identifier: GPL-3.0-only

//! Resolved capture settings
//!
//! [`ResolvedSettings`] keeps one entry per parameter in the order the
//! parameters were decided. An entry is written once; later resolvers may read
//! it but never replace it.

mod parameter;
mod value;

pub use parameter::Parameter;
pub use value::{
    ColorTransform, ModeChoice, Outcome, Preference, RggbGains, SettingValue, TonemapCurve,
};

use crate::errors::{ResolveError, ResolveResult};
use crate::report::format_label;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One decided parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub parameter: Parameter,
    pub outcome: Outcome,
}

impl ResolvedEntry {
    pub fn value(&self) -> Option<&SettingValue> {
        self.outcome.value()
    }

    /// Whether the entry carries a value to apply
    pub fn is_applicable(&self) -> bool {
        self.outcome.is_set()
    }

    /// Report label, derived only from the stored outcome
    pub fn label(&self) -> String {
        format_label(self.parameter, &self.outcome)
    }
}

impl Serialize for ResolvedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResolvedEntry", 4)?;
        state.serialize_field("parameter", &self.parameter)?;
        state.serialize_field("applicable", &self.is_applicable())?;
        state.serialize_field("label", &self.label())?;
        state.serialize_field("outcome", &self.outcome)?;
        state.end()
    }
}

/// Ordered, single-assignment map of decided parameters
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct ResolvedSettings {
    entries: Vec<ResolvedEntry>,
}

impl ResolvedSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `parameter`
    ///
    /// Fails if the parameter already has an entry.
    pub fn insert(&mut self, parameter: Parameter, outcome: Outcome) -> ResolveResult<()> {
        if self.contains(parameter) {
            return Err(ResolveError::DuplicateResolution(parameter));
        }
        self.entries.push(ResolvedEntry { parameter, outcome });
        Ok(())
    }

    pub fn get(&self, parameter: Parameter) -> Option<&ResolvedEntry> {
        self.entries.iter().find(|entry| entry.parameter == parameter)
    }

    pub fn outcome(&self, parameter: Parameter) -> Option<&Outcome> {
        self.get(parameter).map(|entry| &entry.outcome)
    }

    /// Value of `parameter` if it was resolved to one
    pub fn value(&self, parameter: Parameter) -> Option<&SettingValue> {
        self.outcome(parameter).and_then(Outcome::value)
    }

    pub fn contains(&self, parameter: Parameter) -> bool {
        self.get(parameter).is_some()
    }

    /// Entries in resolution order
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that carry a value to apply
    pub fn applicable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_applicable()).count()
    }
}

impl<'a> IntoIterator for &'a ResolvedSettings {
    type Item = &'a ResolvedEntry;
    type IntoIter = std::slice::Iter<'a, ResolvedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
