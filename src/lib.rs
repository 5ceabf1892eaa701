// SPDX-License-Identifier: GPL-3.0-only

//! Manual Camera - deterministic fully-manual camera2 capture configuration
//!
//! Given the capability snapshot of one camera, this library decides every
//! capture-request parameter so the device runs with the least automatic
//! processing it allows: 3A off where possible, post-processing off, lens
//! and sensor at fixed extremes. Each decision is recorded with a label so a
//! report can be logged next to the captured data.
//!
//! # Architecture
//!
//! - [`characteristics`]: capability snapshot and key vocabulary
//! - [`metadata`]: platform enumeration codes
//! - [`settings`]: parameters, values and the resolved settings map
//! - [`resolver`]: rule table and the resolution pass
//! - [`apply`]: writing resolved values into a request sink
//! - [`report`]: human-readable report
//! - [`config`]: resolver configuration
//!
//! # Example
//!
//! ```ignore
//! let snapshot = CapabilitySnapshot::from_path(path)?;
//! let resolution = ConfigurationResolver::new(ResolverConfig::default()).resolve(&snapshot)?;
//! let mut request = CaptureRequestBuilder::new();
//! apply_settings(&resolution.settings, &mut request);
//! ```

pub mod apply;
pub mod characteristics;
pub mod config;
pub mod constants;
pub mod errors;
pub mod metadata;
pub mod report;
pub mod resolver;
pub mod settings;

// Re-export commonly used types
pub use apply::{CaptureRequestBuilder, RequestSink, apply_settings};
pub use characteristics::{CapabilitySnapshot, CapabilityValue, CharacteristicKey};
pub use config::{OutputFormat, ResolverConfig};
pub use errors::{AppError, AppResult, ResolveError, ResolveResult, SnapshotError};
pub use report::ReportFormatter;
pub use resolver::{ConfigurationResolver, Resolution};
pub use settings::{Outcome, Parameter, ResolvedEntry, ResolvedSettings, SettingValue};
