//! Detection modules.
//!
//! Each detector inspects a specific aspect of the request and returns its
//! own typed verdict.

pub mod crawler;
pub mod device;
pub mod engine;
pub mod platform;

pub use crawler::{
    classify, ClassificationResult, CrawlerDetector, CrawlerKind, CrawlerSignature,
    SignatureDefinition, SignatureTable,
};
pub use device::{Device, DeviceDetector};
pub use engine::{Engine, EngineDetector};
pub use platform::{Platform, PlatformDetector, PlatformInfo, Processor};

use std::collections::HashMap;

/// Context for detection containing request information.
#[derive(Debug, Clone, Default)]
pub struct DetectionContext {
    /// Request headers (lowercase keys)
    pub headers: HashMap<String, Vec<String>>,
}

impl DetectionContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context holding only a User-Agent header.
    pub fn from_user_agent(ua: impl Into<String>) -> Self {
        Self::new().with_header("user-agent", ua)
    }

    /// Append a header value.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Get a single header value (first if multiple).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|v| v.first())
            .map(|s| s.as_str())
    }

    /// Returns true if the header is present, whatever its value.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_lowercase())
    }

    /// Get the User-Agent header.
    pub fn user_agent(&self) -> Option<&str> {
        self.header("user-agent")
    }

    /// Get a cookie value from the `cookie` header(s).
    pub fn cookie(&self, name: &str) -> Option<&str> {
        let prefix = format!("{name}=");
        self.headers
            .get("cookie")?
            .iter()
            .flat_map(|header| header.split(';'))
            .find_map(|cookie| cookie.trim().strip_prefix(prefix.as_str()))
    }
}

/// Trait for request detectors.
pub trait Detector: Send + Sync {
    /// Verdict produced by this detector.
    type Output;

    /// Inspect the request and return a verdict.
    fn detect(&self, ctx: &DetectionContext) -> Self::Output;

    /// Get the detector name.
    fn name(&self) -> &'static str;
}
