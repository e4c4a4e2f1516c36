//! Include/exclude filtering of markup.
//!
//! A directive carries two comma-separated name lists. Exclude is an
//! unconditional denylist. A non-empty include list is an allowlist that
//! suppresses everything it does not name. With neither list set the filter
//! never suppresses.

use crate::detectors::{ClassificationResult, Device, Platform};

/// Decide whether markup guarded by a crawler directive is suppressed.
pub fn should_suppress(
    result: &ClassificationResult,
    include: Option<&str>,
    exclude: Option<&str>,
) -> bool {
    TagFilter::new(include, exclude).suppresses_crawler(result)
}

/// Include/exclude directive over crawler, device or platform names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFilter<'a> {
    include: Option<&'a str>,
    exclude: Option<&'a str>,
}

impl<'a> TagFilter<'a> {
    pub fn new(include: Option<&'a str>, exclude: Option<&'a str>) -> Self {
        Self { include, exclude }
    }

    /// Returns true when neither list is set (or both are empty strings).
    pub fn is_pass_through(&self) -> bool {
        self.include.map_or(true, str::is_empty) && self.exclude.map_or(true, str::is_empty)
    }

    /// Suppress decision for a crawler verdict. Non-crawlers are never
    /// suppressed.
    pub fn suppresses_crawler(&self, result: &ClassificationResult) -> bool {
        if self.is_pass_through() || !result.is_crawler() {
            return false;
        }
        self.suppresses_name(result.name())
    }

    /// Suppress decision for a detected device.
    pub fn suppresses_device(&self, device: Device) -> bool {
        !self.is_pass_through() && self.suppresses_name(device.as_str())
    }

    /// Suppress decision for a detected platform.
    pub fn suppresses_platform(&self, platform: Platform) -> bool {
        !self.is_pass_through() && self.suppresses_name(platform.as_str())
    }

    fn suppresses_name(&self, name: &str) -> bool {
        if tokens(self.exclude).any(|token| token.eq_ignore_ascii_case(name)) {
            return true;
        }

        let mut has_include = false;
        for token in tokens(self.include) {
            has_include = true;
            if token.eq_ignore_ascii_case(name) {
                return false;
            }
        }
        has_include
    }
}

/// Trimmed, non-empty tokens of a comma-separated list.
fn tokens(list: Option<&str>) -> impl Iterator<Item = &str> {
    list.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
