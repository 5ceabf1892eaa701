// SPDX-License-Identifier: GPL-3.0-only

//! Capability-to-configuration resolution
//!
//! [`ConfigurationResolver`] walks the rule table once, in order. Every rule
//! first passes the same support checks:
//!
//! 1. the configured API level is at least the rule's level
//! 2. the device lists the request key (when it reports request keys at all)
//! 3. the capability the rule reads is present
//!
//! Failing any of them records `NOT SUPPORTED` without calling the rule.
//! Otherwise the rule decides the outcome from the snapshot and the outcomes
//! it declared as dependencies.

mod context;
mod control;
mod corrections;
mod optics;
pub mod rules;
pub mod select;
mod sensor;
mod statistics;

pub use context::ResolutionContext;
pub use rules::{RESOLUTION_ORDER, Rule};
pub use sensor::min_frame_duration;

use crate::characteristics::CapabilitySnapshot;
use crate::config::ResolverConfig;
use crate::errors::ResolveResult;
use crate::report::ReportFormatter;
use crate::settings::{Outcome, ResolvedSettings};
use tracing::{debug, info};

/// Output of one resolution pass
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub settings: ResolvedSettings,
    pub report: String,
}

/// Runs the rule table against a capability snapshot
#[derive(Debug, Clone)]
pub struct ConfigurationResolver<'r> {
    config: ResolverConfig,
    rules: &'r [Rule],
}

impl ConfigurationResolver<'static> {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            rules: RESOLUTION_ORDER,
        }
    }
}

impl<'r> ConfigurationResolver<'r> {
    /// Resolver over a custom rule table
    pub fn with_rules(config: ResolverConfig, rules: &'r [Rule]) -> Self {
        Self { config, rules }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve every parameter and render the report
    pub fn resolve(&self, snapshot: &CapabilitySnapshot) -> ResolveResult<Resolution> {
        let settings = self.resolve_settings(snapshot)?;
        let report = ReportFormatter::new().render(&settings);
        Ok(Resolution { settings, report })
    }

    /// Resolve every parameter
    ///
    /// Any error aborts the pass; no partial settings are returned.
    pub fn resolve_settings(
        &self,
        snapshot: &CapabilitySnapshot,
    ) -> ResolveResult<ResolvedSettings> {
        snapshot.validate_mandatory()?;

        let mut settings = ResolvedSettings::new();
        for rule in self.rules {
            let outcome = match self.support_check(rule, snapshot)? {
                Some(outcome) => outcome,
                None => {
                    let ctx = ResolutionContext::new(snapshot, &self.config, &settings, rule);
                    (rule.resolve)(&ctx)?
                }
            };
            debug!(
                parameter = %rule.parameter,
                label = %crate::report::format_label(rule.parameter, &outcome),
                "Resolved parameter"
            );
            settings.insert(rule.parameter, outcome)?;
        }

        let unsupported = settings
            .iter()
            .filter(|e| e.outcome == Outcome::NotSupported)
            .count();
        info!(
            camera_id = snapshot.camera_id(),
            api_level = self.config.api_level,
            parameters = settings.len(),
            applicable = settings.applicable_count(),
            unsupported,
            "Resolved capture configuration"
        );
        Ok(settings)
    }

    /// `Some(NotSupported)` when the rule cannot apply to this device
    fn support_check(
        &self,
        rule: &Rule,
        snapshot: &CapabilitySnapshot,
    ) -> ResolveResult<Option<Outcome>> {
        if self.config.api_level < rule.min_api_level {
            return Ok(Some(Outcome::NotSupported));
        }
        if let Some(keys) = snapshot.request_keys()? {
            if !keys.iter().any(|k| k == rule.parameter.key_name()) {
                return Ok(Some(Outcome::NotSupported));
            }
        }
        if let Some(key) = rule.capability {
            if !snapshot.contains(key) {
                return Ok(Some(Outcome::NotSupported));
            }
        }
        Ok(None)
    }
}
