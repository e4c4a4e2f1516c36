//! Error types for detection setup.
//!
//! Classification itself never fails; these errors surface only while
//! building options, signature tables and detectors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing detectors or loading configuration.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// A required value was missing, empty or otherwise unusable.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A version pattern failed to compile.
    #[error("invalid version pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A version pattern compiled but has nothing to capture.
    #[error("version pattern `{0}` has no capture group")]
    MissingCapture(String),

    /// A version string is not `major.minor[.patch]`.
    #[error("invalid version `{0}`")]
    InvalidVersion(String),

    /// A kind name (crawler, device, ...) is not recognized.
    #[error("invalid {what}: {value}")]
    InvalidName { what: &'static str, value: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl DetectionError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_name(what: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidName {
            what,
            value: value.into(),
        }
    }
}
