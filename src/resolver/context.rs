// SPDX-License-Identifier: GPL-3.0-only

//! Read-only view handed to each parameter resolver

use super::rules::Rule;
use crate::characteristics::CapabilitySnapshot;
use crate::config::{OutputFormat, ResolverConfig};
use crate::errors::{ResolveError, ResolveResult};
use crate::metadata::{ae_mode, awb_mode, control_mode, image_format};
use crate::settings::{Outcome, Parameter, ResolvedSettings};

/// What a resolver may see while deciding its parameter
///
/// Upstream parameters are only visible if the rule declares them and they
/// were decided earlier in the pass.
pub struct ResolutionContext<'a> {
    snapshot: &'a CapabilitySnapshot,
    config: &'a ResolverConfig,
    resolved: &'a ResolvedSettings,
    rule: &'a Rule,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(
        snapshot: &'a CapabilitySnapshot,
        config: &'a ResolverConfig,
        resolved: &'a ResolvedSettings,
        rule: &'a Rule,
    ) -> Self {
        Self {
            snapshot,
            config,
            resolved,
            rule,
        }
    }

    pub fn snapshot(&self) -> &'a CapabilitySnapshot {
        self.snapshot
    }

    pub fn config(&self) -> &'a ResolverConfig {
        self.config
    }

    /// Parameter being resolved
    pub fn parameter(&self) -> Parameter {
        self.rule.parameter
    }

    pub fn forced_auto(&self) -> bool {
        self.config.force_control_mode_auto
    }

    /// Outcome of a declared, already-resolved upstream parameter
    pub fn upstream(&self, dependency: Parameter) -> ResolveResult<&'a Outcome> {
        let unresolved = ResolveError::UnresolvedDependency {
            parameter: self.rule.parameter,
            dependency,
        };
        if !self.rule.depends_on.contains(&dependency) {
            return Err(unresolved);
        }
        self.resolved.outcome(dependency).ok_or(unresolved)
    }

    /// Control mode is AUTO, or unsupported (the platform default is AUTO)
    pub fn control_mode_auto(&self) -> ResolveResult<bool> {
        Ok(match self.upstream(Parameter::ControlMode)? {
            Outcome::NotSupported => true,
            outcome => outcome.mode_code() == Some(control_mode::AUTO.code),
        })
    }

    pub fn awb_auto(&self) -> ResolveResult<bool> {
        Ok(self.upstream(Parameter::AwbMode)?.mode_code() == Some(awb_mode::AUTO.code))
    }

    pub fn ae_on(&self) -> ResolveResult<bool> {
        Ok(self.upstream(Parameter::AeMode)?.mode_code() == Some(ae_mode::ON.code))
    }

    /// Auto-exposure is running (control AUTO and AE ON)
    pub fn auto_exposure(&self) -> ResolveResult<bool> {
        Ok(self.control_mode_auto()? && self.ae_on()?)
    }

    /// `ImageFormat` code of the configured output stream
    pub fn output_format(&self) -> ResolveResult<i32> {
        Ok(match self.config.output_format {
            OutputFormat::Raw => image_format::RAW_SENSOR,
            OutputFormat::Yuv => image_format::YUV_420_888,
            OutputFormat::Auto if self.snapshot.supports_raw()? => image_format::RAW_SENSOR,
            OutputFormat::Auto => image_format::YUV_420_888,
        })
    }
}
