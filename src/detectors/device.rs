//! Device category detection.
//!
//! Uses User-Agent keywords first, then request headers that only mobile
//! gateways and client hints send.

use super::{DetectionContext, Detector};
use crate::error::DetectionError;
use crate::text::{contains_any_ignore_ascii_case, contains_ignore_ascii_case};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

const TV_KEYWORDS: &[&str] = &[
    "smart-tv",
    "smarttv",
    "googletv",
    "appletv",
    "hbbtv",
    "pov_tv",
    "netcast.tv",
    "crkey",
    "roku",
    "bravia",
    "web0s",
];

const CONSOLE_KEYWORDS: &[&str] = &["xbox", "playstation", "nintendo"];

const CAR_KEYWORDS: &[&str] = &["tesla", "carplay", "android automotive"];

const WATCH_KEYWORDS: &[&str] = &["watch os", "watchos", "wearos", "smartwatch", "; watch"];

const TABLET_KEYWORDS: &[&str] = &[
    "ipad",
    "tablet",
    "kindle",
    "silk/",
    "playbook",
    "hp-tablet",
    "nexus 7",
    "nexus 10",
    "sm-t",
];

const MOBILE_KEYWORDS: &[&str] = &[
    "mobile",
    "iphone",
    "ipod",
    "android",
    "blackberry",
    "bb10",
    "opera mini",
    "opera mobi",
    "windows phone",
    "iemobile",
    "symbian",
    "kaios",
    "phone",
];

/// Headers only sent by mobile browsers, WAP gateways and transcoders.
const MOBILE_HEADERS: &[&str] = &[
    "x-wap-profile",
    "profile",
    "x-operamini-phone-ua",
    "device-stock-ua",
];

/// Device category of the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Device {
    #[default]
    Desktop,
    Tablet,
    Mobile,
    Watch,
    Tv,
    Console,
    Car,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Desktop => "Desktop",
            Device::Tablet => "Tablet",
            Device::Mobile => "Mobile",
            Device::Watch => "Watch",
            Device::Tv => "Tv",
            Device::Console => "Console",
            Device::Car => "Car",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Device::Desktop),
            "tablet" => Ok(Device::Tablet),
            "mobile" => Ok(Device::Mobile),
            "watch" => Ok(Device::Watch),
            "tv" => Ok(Device::Tv),
            "console" => Ok(Device::Console),
            "car" => Ok(Device::Car),
            _ => Err(DetectionError::invalid_name("device", s)),
        }
    }
}

impl Serialize for Device {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Device {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Device detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceDetector;

impl DeviceDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify a User-Agent string alone.
    pub fn classify(&self, ua: &str) -> Option<Device> {
        if ua.trim().is_empty() {
            return None;
        }

        if contains_any_ignore_ascii_case(ua, TV_KEYWORDS) {
            Some(Device::Tv)
        } else if contains_any_ignore_ascii_case(ua, CONSOLE_KEYWORDS) {
            Some(Device::Console)
        } else if contains_any_ignore_ascii_case(ua, CAR_KEYWORDS) {
            Some(Device::Car)
        } else if contains_any_ignore_ascii_case(ua, WATCH_KEYWORDS) {
            Some(Device::Watch)
        } else if Self::is_tablet(ua) {
            Some(Device::Tablet)
        } else if contains_any_ignore_ascii_case(ua, MOBILE_KEYWORDS) {
            Some(Device::Mobile)
        } else {
            None
        }
    }

    fn is_tablet(ua: &str) -> bool {
        contains_any_ignore_ascii_case(ua, TABLET_KEYWORDS)
            // Android phones advertise "Mobile"; tablets don't.
            || (contains_ignore_ascii_case(ua, "android") && !contains_ignore_ascii_case(ua, "mobile"))
    }

    fn has_mobile_headers(ctx: &DetectionContext) -> bool {
        if ctx.header("sec-ch-ua-mobile").is_some_and(|v| v.trim() == "?1") {
            return true;
        }
        MOBILE_HEADERS.iter().any(|header| ctx.has_header(header))
    }
}

impl Detector for DeviceDetector {
    type Output = Device;

    fn detect(&self, ctx: &DetectionContext) -> Device {
        if let Some(device) = ctx.user_agent().and_then(|ua| self.classify(ua)) {
            return device;
        }
        if Self::has_mobile_headers(ctx) {
            return Device::Mobile;
        }
        Device::Desktop
    }

    fn name(&self) -> &'static str {
        "device"
    }
}
