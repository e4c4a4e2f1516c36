//! Rendering engine detection.

use super::platform::{Platform, PlatformDetector};
use super::{DetectionContext, Detector};
use crate::error::DetectionError;
use crate::text::{contains_any_ignore_ascii_case, contains_ignore_ascii_case};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Browsers built on Blink; only consulted when `AppleWebKit` is present.
const BLINK_TOKENS: &[&str] = &["chrome", "chromium", "crios", "edg/", "opr/", "samsungbrowser"];

/// Rendering engine family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Engine {
    WebKit,
    Blink,
    Gecko,
    Trident,
    EdgeHtml,
    Servo,
    Others,
    #[default]
    Unknown,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::WebKit => "WebKit",
            Engine::Blink => "Blink",
            Engine::Gecko => "Gecko",
            Engine::Trident => "Trident",
            Engine::EdgeHtml => "EdgeHTML",
            Engine::Servo => "Servo",
            Engine::Others => "Others",
            Engine::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "webkit" => Ok(Engine::WebKit),
            "blink" => Ok(Engine::Blink),
            "gecko" => Ok(Engine::Gecko),
            "trident" => Ok(Engine::Trident),
            "edgehtml" => Ok(Engine::EdgeHtml),
            "servo" => Ok(Engine::Servo),
            "others" => Ok(Engine::Others),
            "unknown" => Ok(Engine::Unknown),
            _ => Err(DetectionError::invalid_name("engine", s)),
        }
    }
}

impl Serialize for Engine {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Engine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Engine detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineDetector {
    platform: PlatformDetector,
}

impl EngineDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a User-Agent whose platform is already known.
    pub fn classify(&self, ua: &str, platform: Platform) -> Engine {
        if ua.trim().is_empty() {
            return Engine::Unknown;
        }

        // Every iOS browser is required to use WebKit.
        if platform == Platform::Ios {
            return Engine::WebKit;
        }

        if contains_ignore_ascii_case(ua, "servo") {
            Engine::Servo
        } else if contains_ignore_ascii_case(ua, "edge/") {
            Engine::EdgeHtml
        } else if contains_any_ignore_ascii_case(ua, &["trident", "msie"]) {
            Engine::Trident
        } else if contains_ignore_ascii_case(ua, "applewebkit") {
            if contains_any_ignore_ascii_case(ua, BLINK_TOKENS) {
                Engine::Blink
            } else {
                Engine::WebKit
            }
        } else if contains_any_ignore_ascii_case(ua, &["gecko/", "firefox"]) {
            Engine::Gecko
        } else {
            Engine::Others
        }
    }
}

impl Detector for EngineDetector {
    type Output = Engine;

    fn detect(&self, ctx: &DetectionContext) -> Engine {
        match ctx.user_agent() {
            Some(ua) => self.classify(ua, self.platform.classify(ua).kind),
            None => Engine::Unknown,
        }
    }

    fn name(&self) -> &'static str {
        "engine"
    }
}
