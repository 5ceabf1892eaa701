// SPDX-License-Identifier: GPL-3.0-only

//! Error types for capability parsing and configuration resolution

use crate::characteristics::{CharacteristicKey, ValueKind};
use crate::settings::Parameter;
use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for a resolution pass
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Capability snapshot could not be loaded
    Snapshot(SnapshotError),
    /// Resolution aborted on a fatal capability problem
    Resolve(ResolveError),
    /// Configuration errors
    Config(ConfigError),
}

/// Capability snapshot loading errors
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// Document is not valid JSON or has the wrong top-level shape
    Parse(String),
    /// A known key carries a value of the wrong shape
    InvalidValue {
        key: CharacteristicKey,
        reason: String,
    },
}

/// Fatal resolution errors
///
/// Unsupported and inapplicable parameters are not errors; they are recorded
/// in the resolved settings and resolution continues.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// A capability every device must report is absent
    MissingMandatoryCapability(CharacteristicKey),
    /// A list or range is present but offers nothing to choose from
    AmbiguousRange {
        parameter: Parameter,
        key: CharacteristicKey,
    },
    /// A capability value does not have the shape its key requires
    MalformedCapability {
        key: CharacteristicKey,
        expected: ValueKind,
    },
    /// A resolver read a parameter that is undeclared or not yet resolved
    UnresolvedDependency {
        parameter: Parameter,
        dependency: Parameter,
    },
    /// A parameter was resolved twice in one pass
    DuplicateResolution(Parameter),
}

/// Configuration file errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// File exists but could not be read
    Read(String),
    /// File contents are not a valid configuration
    Invalid(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Snapshot(e) => write!(f, "Snapshot error: {}", e),
            AppError::Resolve(e) => write!(f, "Resolution error: {}", e),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Parse(msg) => write!(f, "Malformed snapshot: {}", msg),
            SnapshotError::InvalidValue { key, reason } => {
                write!(f, "Invalid value for {}: {}", key, reason)
            }
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MissingMandatoryCapability(key) => {
                write!(f, "Mandatory capability {} is missing", key)
            }
            ResolveError::AmbiguousRange { parameter, key } => write!(
                f,
                "No usable candidate in {} while resolving {}",
                key, parameter
            ),
            ResolveError::MalformedCapability { key, expected } => {
                write!(f, "Capability {} is not a valid {}", key, expected)
            }
            ResolveError::UnresolvedDependency {
                parameter,
                dependency,
            } => write!(
                f,
                "{} read {} before it was resolved or without declaring it",
                parameter, dependency
            ),
            ResolveError::DuplicateResolution(parameter) => {
                write!(f, "{} was resolved more than once", parameter)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(msg) => write!(f, "Failed to read configuration: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for SnapshotError {}
impl std::error::Error for ResolveError {}
impl std::error::Error for ConfigError {}

impl From<SnapshotError> for AppError {
    fn from(err: SnapshotError) -> Self {
        AppError::Snapshot(err)
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        AppError::Resolve(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_key_and_parameter() {
        let err = ResolveError::AmbiguousRange {
            parameter: Parameter::AeTargetFpsRange,
            key: CharacteristicKey::ControlAeAvailableTargetFpsRanges,
        };
        let msg = err.to_string();
        assert!(msg.contains("CONTROL_AE_AVAILABLE_TARGET_FPS_RANGES"));
        assert!(msg.contains("CONTROL_AE_TARGET_FPS_RANGE"));
    }

    #[test]
    fn test_app_error_wraps_resolve_error() {
        let err: AppError =
            ResolveError::MissingMandatoryCapability(CharacteristicKey::InfoSupportedHardwareLevel)
                .into();
        assert!(matches!(err, AppError::Resolve(_)));
        assert!(err.to_string().starts_with("Resolution error:"));
    }
}
