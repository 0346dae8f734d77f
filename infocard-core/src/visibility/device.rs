// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Device class, derived from the viewport width.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Widest viewport (logical pixels) still treated as mobile.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Class of device the card is shown on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

/// Unknown device class name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown device class: {0} (expected desktop or mobile)")]
pub struct UnknownDevice(pub String);

impl DeviceClass {
    /// Classifies a viewport. Recompute on every viewport change.
    pub fn from_viewport_width(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceClass::Desktop => f.write_str("desktop"),
            DeviceClass::Mobile => f.write_str("mobile"),
        }
    }
}

impl FromStr for DeviceClass {
    type Err = UnknownDevice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(DeviceClass::Desktop),
            "mobile" => Ok(DeviceClass::Mobile),
            _ => Err(UnknownDevice(s.to_string())),
        }
    }
}
