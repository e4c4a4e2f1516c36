//! Platform (operating system) and processor detection.

use super::{DetectionContext, Detector};
use crate::error::DetectionError;
use crate::text::{contains_any_ignore_ascii_case, contains_ignore_ascii_case};
use crate::version::Version;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;
use std::{fmt, str::FromStr};

static WINDOWS_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)windows (?:nt|phone) (\d+)\.(\d+)").expect("valid regex: windows version")
});

static IOS_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bOS (\d+)[_.](\d+)(?:[_.](\d+))?").expect("valid regex: ios version")
});

static ANDROID_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)android (\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("valid regex: android version")
});

static MAC_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)mac os x (\d+)[_.](\d+)(?:[_.](\d+))?").expect("valid regex: mac version")
});

static ARM_PROCESSOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:arm(?:v\d+\w*|64|hf|el)?|aarch64)\b").expect("valid regex: arm processor")
});

/// Operating system family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Mac,
    Ios,
    Android,
    ChromeOs,
    Linux,
    /// Present but unrecognized
    Others,
    /// No User-Agent
    #[default]
    Unknown,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Mac => "Mac",
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::ChromeOs => "ChromeOS",
            Platform::Linux => "Linux",
            Platform::Others => "Others",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "mac" | "macos" => Ok(Platform::Mac),
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "chromeos" => Ok(Platform::ChromeOs),
            "linux" => Ok(Platform::Linux),
            "others" => Ok(Platform::Others),
            "unknown" => Ok(Platform::Unknown),
            _ => Err(DetectionError::invalid_name("platform", s)),
        }
    }
}

impl Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Processor architecture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Processor {
    Arm,
    X86,
    X64,
    #[default]
    Others,
}

/// Platform verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub kind: Platform,
    pub version: Option<Version>,
    pub processor: Processor,
}

/// Platform detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDetector;

impl PlatformDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify a User-Agent string.
    pub fn classify(&self, ua: &str) -> PlatformInfo {
        if ua.trim().is_empty() {
            return PlatformInfo::default();
        }

        let (kind, version) = Self::kind_and_version(ua);
        PlatformInfo {
            kind,
            version,
            processor: Self::processor(ua, kind),
        }
    }

    fn kind_and_version(ua: &str) -> (Platform, Option<Version>) {
        // Windows Phone also advertises Android; Windows goes first.
        if contains_ignore_ascii_case(ua, "windows") {
            (Platform::Windows, capture_version(&WINDOWS_VERSION, ua))
        } else if contains_any_ignore_ascii_case(ua, &["iphone", "ipad", "ipod"]) {
            (Platform::Ios, capture_version(&IOS_VERSION, ua))
        } else if contains_ignore_ascii_case(ua, "android") {
            (Platform::Android, capture_version(&ANDROID_VERSION, ua))
        } else if contains_ignore_ascii_case(ua, "cros ") {
            (Platform::ChromeOs, None)
        } else if contains_any_ignore_ascii_case(ua, &["macintosh", "mac os x"]) {
            (Platform::Mac, capture_version(&MAC_VERSION, ua))
        } else if contains_any_ignore_ascii_case(ua, &["linux", "x11"]) {
            (Platform::Linux, None)
        } else {
            (Platform::Others, None)
        }
    }

    fn processor(ua: &str, kind: Platform) -> Processor {
        if contains_any_ignore_ascii_case(ua, &["x86_64", "win64", "wow64", "x64", "amd64"]) {
            Processor::X64
        } else if ARM_PROCESSOR.is_match(ua) {
            Processor::Arm
        } else if contains_any_ignore_ascii_case(ua, &["i686", "i386", "x86"]) {
            Processor::X86
        } else {
            match kind {
                Platform::Ios | Platform::Android => Processor::Arm,
                Platform::Mac if contains_ignore_ascii_case(ua, "intel") => Processor::X64,
                _ => Processor::Others,
            }
        }
    }
}

fn capture_version(regex: &Regex, ua: &str) -> Option<Version> {
    let caps = regex.captures(ua)?;
    Version::from_components(
        caps.get(1)?.as_str(),
        caps.get(2).map(|m| m.as_str()),
        caps.get(3).map(|m| m.as_str()),
    )
}

impl Detector for PlatformDetector {
    type Output = PlatformInfo;

    fn detect(&self, ctx: &DetectionContext) -> PlatformInfo {
        ctx.user_agent()
            .map(|ua| self.classify(ua))
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "platform"
    }
}
