//! Catalog record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One browser/device capability descriptor from the catalog.
///
/// `browser` is always present: for desktop entries it names the browser
/// build itself, for device entries it names the device's dominant browser
/// (e.g. "Mobile Safari" on an iPhone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Browser {
    pub os: String,
    pub os_version: String,
    pub browser: String,
    #[serde(flatten)]
    pub kind: BrowserKind,
}

/// Desktop/device distinction, carried explicitly rather than inferred from
/// field presence.
///
/// The upstream API flattens both shapes into one object and pads the absent
/// side with `null`, so deserialization is untagged: a usable `device` string
/// selects [`BrowserKind::Device`], otherwise `browser_version` selects
/// [`BrowserKind::Desktop`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrowserKind {
    /// Real mobile/tablet hardware.
    Device { device: String },
    /// A desktop browser build.
    Desktop { browser_version: String },
}

impl Browser {
    /// Returns true for real-device entries.
    pub fn is_device(&self) -> bool {
        matches!(self.kind, BrowserKind::Device { .. })
    }
}

impl fmt::Display for Browser {
    /// Canonical lookup form: `os:os_version device` for devices,
    /// `os:os_version browser:browser_version` for desktops.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BrowserKind::Device { device } => {
                write!(f, "{}:{} {}", self.os, self.os_version, device)
            }
            BrowserKind::Desktop { browser_version } => {
                write!(
                    f,
                    "{}:{} {}:{}",
                    self.os, self.os_version, self.browser, browser_version
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_json_decodes_as_desktop() {
        let json = r#"{
            "os": "Windows",
            "os_version": "10",
            "browser": "chrome",
            "browser_version": "47.0",
            "device": null
        }"#;

        let browser: Browser = serde_json::from_str(json).unwrap();

        assert_eq!(browser.os, "Windows");
        assert_eq!(
            browser.kind,
            BrowserKind::Desktop {
                browser_version: "47.0".to_string()
            }
        );
    }

    #[test]
    fn test_device_json_decodes_as_device() {
        let json = r#"{
            "os": "ios",
            "os_version": "9.0",
            "browser": "Mobile Safari",
            "browser_version": null,
            "device": "iPhone 6S"
        }"#;

        let browser: Browser = serde_json::from_str(json).unwrap();

        assert_eq!(
            browser.kind,
            BrowserKind::Device {
                device: "iPhone 6S".to_string()
            }
        );
    }

    #[test]
    fn test_round_trip_preserves_variant() {
        let device = Browser {
            os: "android".to_string(),
            os_version: "5.0".to_string(),
            browser: "Android Browser".to_string(),
            kind: BrowserKind::Device {
                device: "Google Nexus 5".to_string(),
            },
        };

        let json = serde_json::to_string(&device).unwrap();
        let decoded: Browser = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, device);
    }

    #[test]
    fn test_display_forms() {
        let desktop = Browser {
            os: "Windows".to_string(),
            os_version: "10".to_string(),
            browser: "chrome".to_string(),
            kind: BrowserKind::Desktop {
                browser_version: "47.0".to_string(),
            },
        };
        let device = Browser {
            os: "ios".to_string(),
            os_version: "9.0".to_string(),
            browser: "Mobile Safari".to_string(),
            kind: BrowserKind::Device {
                device: "iPhone 6S".to_string(),
            },
        };

        assert_eq!(desktop.to_string(), "Windows:10 chrome:47.0");
        assert_eq!(device.to_string(), "ios:9.0 iPhone 6S");
    }
}
