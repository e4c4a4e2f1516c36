//! Responsive view resolution.
//!
//! The view is the layout a host should render: the user's stored
//! preference when present, otherwise the configured default for the
//! detected device.

use crate::config::ResponsiveOptions;
use crate::detectors::{DetectionContext, Device};
use serde::Serialize;
use tracing::debug;

/// Resolved responsive view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponsiveView {
    /// Device layout to render
    pub view: Device,
    /// Whether the view came from the user's preference
    pub preferred: bool,
}

/// Maps detected devices and stored preferences to a view.
#[derive(Debug, Clone)]
pub struct ResponsiveResolver {
    options: ResponsiveOptions,
}

impl ResponsiveResolver {
    pub fn new(options: ResponsiveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResponsiveOptions {
        &self.options
    }

    /// Default view for `device`; devices without a configured default pass
    /// through.
    pub fn default_view(&self, device: Device) -> Device {
        match device {
            Device::Mobile => self.options.default_mobile,
            Device::Tablet => self.options.default_tablet,
            Device::Desktop => self.options.default_desktop,
            other => other,
        }
    }

    /// Resolve the view for `device` given an optional preference.
    pub fn resolve(&self, device: Device, preference: Option<Device>) -> ResponsiveView {
        if !self.options.enabled {
            return ResponsiveView {
                view: device,
                preferred: false,
            };
        }
        match preference {
            Some(view) => ResponsiveView {
                view,
                preferred: true,
            },
            None => ResponsiveView {
                view: self.default_view(device),
                preferred: false,
            },
        }
    }

    /// Read the preferred view from the preference cookie.
    ///
    /// Unparseable values are ignored.
    pub fn preference(&self, ctx: &DetectionContext) -> Option<Device> {
        let value = ctx.cookie(&self.options.cookie_name)?;
        match value.parse() {
            Ok(device) => Some(device),
            Err(_) => {
                debug!(cookie = %self.options.cookie_name, value, "ignoring unknown view preference");
                None
            }
        }
    }

    /// Resolve the view for `device` using the request's preference cookie.
    pub fn resolve_for(&self, ctx: &DetectionContext, device: Device) -> ResponsiveView {
        self.resolve(device, self.preference(ctx))
    }

    /// Cookie helpers bound to the configured cookie name.
    pub fn preference_cookie(&self) -> PreferenceCookie<'_> {
        PreferenceCookie {
            name: &self.options.cookie_name,
        }
    }
}

impl Default for ResponsiveResolver {
    fn default() -> Self {
        Self::new(ResponsiveOptions::default())
    }
}

/// Builds `Set-Cookie` values that store or clear a view preference.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceCookie<'a> {
    name: &'a str,
}

impl PreferenceCookie<'_> {
    /// `Set-Cookie` value storing `view`.
    pub fn set(&self, view: Device) -> String {
        format!(
            "{}={}; Path=/; SameSite=Lax",
            self.name,
            view.as_str().to_ascii_lowercase()
        )
    }

    /// `Set-Cookie` value expiring the preference.
    pub fn clear(&self) -> String {
        format!("{}=; Path=/; Max-Age=0; SameSite=Lax", self.name)
    }
}
