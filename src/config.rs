//! Configuration types for user-agent detection.

use crate::detectors::Device;
use crate::error::DetectionError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main detection configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionOptions {
    /// Crawler classification settings
    pub crawler: CrawlerOptions,

    /// Responsive view settings
    pub responsive: ResponsiveOptions,
}

impl DetectionOptions {
    /// Load options from a JSON file, or YAML when the extension is
    /// `yaml`/`yml`.
    pub fn from_path(path: &Path) -> Result<Self, DetectionError> {
        let content = std::fs::read_to_string(path).map_err(|source| DetectionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options: Self = if path.extension().is_some_and(|e| e == "yaml" || e == "yml") {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        options.validate()?;
        Ok(options)
    }

    /// Reject values that would make detection meaningless.
    pub fn validate(&self) -> Result<(), DetectionError> {
        self.crawler.validate()?;
        self.responsive.validate()
    }
}

/// Crawler classification settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlerOptions {
    /// Extra crawler names, matched case-insensitively as substrings of the
    /// User-Agent and classified as `Others`
    pub others: Vec<String>,
}

impl CrawlerOptions {
    /// Add an extra crawler name.
    pub fn add_other(&mut self, name: impl Into<String>) -> &mut Self {
        self.others.push(name.into());
        self
    }

    /// Builder variant of [`add_other`](Self::add_other).
    #[must_use]
    pub fn with_other(mut self, name: impl Into<String>) -> Self {
        self.others.push(name.into());
        self
    }

    fn validate(&self) -> Result<(), DetectionError> {
        // A blank name is a substring of every User-Agent.
        if self.others.iter().any(|name| name.trim().is_empty()) {
            return Err(DetectionError::invalid_argument(
                "crawler.others",
                "crawler names must not be blank",
            ));
        }
        Ok(())
    }
}

/// Responsive view settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveOptions {
    /// Resolve a view from preference and device defaults
    pub enabled: bool,

    /// View served to mobile devices
    pub default_mobile: Device,

    /// View served to tablets
    pub default_tablet: Device,

    /// View served to desktops
    pub default_desktop: Device,

    /// Cookie holding the user's preferred view
    pub cookie_name: String,
}

impl Default for ResponsiveOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            default_mobile: Device::Mobile,
            default_tablet: Device::Desktop,
            default_desktop: Device::Desktop,
            cookie_name: "detection_preference".to_string(),
        }
    }
}

impl ResponsiveOptions {
    fn validate(&self) -> Result<(), DetectionError> {
        let name = &self.cookie_name;
        if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '=' || c == ';') {
            return Err(DetectionError::invalid_argument(
                "responsive.cookie_name",
                format!("not a usable cookie name: {:?}", self.cookie_name),
            ));
        }
        Ok(())
    }
}
