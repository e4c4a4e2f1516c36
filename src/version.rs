//! Dotted numeric versions (`major.minor[.patch]`).

use crate::error::DetectionError;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// A `major.minor[.patch]` version extracted from a User-Agent.
///
/// `2.1` and `2.1.0` are distinct values, mirroring how they appear on the
/// wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl Version {
    /// The zero version `0.0`.
    pub const ZERO: Version = Version::new(0, 0);

    /// Create a two component version.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Set the third component.
    #[must_use]
    pub const fn with_patch(mut self, patch: u32) -> Self {
        self.patch = Some(patch);
        self
    }

    /// Returns true for `0.0` (and `0.0.0`).
    pub fn is_zero(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch.unwrap_or(0) == 0
    }

    /// Build a version from loosely separated components such as `10`,
    /// `14_2` or `10.15.7`. A missing minor component becomes `0`.
    pub(crate) fn from_components(major: &str, minor: Option<&str>, patch: Option<&str>) -> Option<Self> {
        let major = major.parse().ok()?;
        let minor = match minor {
            Some(minor) => minor.parse().ok()?,
            None => 0,
        };
        let patch = match patch {
            Some(patch) => Some(patch.parse().ok()?),
            None => None,
        };
        Some(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for Version {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DetectionError::InvalidVersion(s.to_string());
        let mut parts = s.trim().split('.');

        let major = parts.next().ok_or_else(invalid)?;
        let minor = parts.next().ok_or_else(invalid)?;
        let patch = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major) || !all_digits(minor) || !patch.map_or(true, all_digits) {
            return Err(invalid());
        }

        Self::from_components(major, Some(minor), patch).ok_or_else(invalid)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}
