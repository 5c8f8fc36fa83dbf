//! Device profile document
//!
//! A profile records what a device's platform services answered at one point
//! in time. Every section beyond `api_level` and `device` is optional; an
//! omitted section means the corresponding service is unavailable.
//!
//! ```yaml
//! api_level: 33
//! device:
//!   android_id: a1b2c3d4e5f60718
//!   manufacturer: Google
//!   model: Pixel 7
//!   brand: google
//!   platform_version: "13"
//!   carrier_name: T-Mobile
//!   real_display_size: 1080x2400
//!   display_density: 420
//!   locale: en_US
//!   time_zone: Europe/Berlin
//! permissions:
//!   - android.permission.READ_PHONE_STATE
//! telephony:
//!   data_state: 2
//!   signal_level: 3
//! connectivity:
//!   active_network: 100
//!   networks:
//!     - handle: 100
//!       capabilities:
//!         transport_types: [1]
//!         fields:
//!           mSSID: '"lab"'
//! window:
//!   visible_display_frame_top: 84
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use droidinfo_core::domain::DisplaySize;
use droidinfo_core::ports::{LegacyNetworkInfo, PlatformServices};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::services::{
    FixtureConnectivity, FixtureDevice, FixturePermissions, FixtureTelephony, FixtureWindow,
};
use crate::FixtureError;

/// A recorded device profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Platform API level
    pub api_level: u32,
    pub device: DeviceIdentity,
    /// Granted runtime permissions
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub telephony: Option<TelephonyProfile>,
    #[serde(default)]
    pub connectivity: Option<ConnectivityProfile>,
    #[serde(default)]
    pub window: Option<WindowProfile>,
}

/// Identity, display and locale getters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub android_id: String,
    pub manufacturer: String,
    pub model: String,
    pub brand: String,
    /// Defaults to the profile's `api_level`
    #[serde(default)]
    pub api_version: Option<String>,
    pub platform_version: String,
    #[serde(default)]
    pub carrier_name: Option<String>,
    pub real_display_size: DisplaySize,
    pub display_density: f64,
    pub locale: String,
    pub time_zone: String,
}

/// Telephony service answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelephonyProfile {
    /// Raw platform data state code
    pub data_state: i32,
    #[serde(default)]
    pub signal_level: Option<i32>,
}

/// Connectivity service answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityProfile {
    #[serde(default)]
    pub active_network: Option<u64>,
    #[serde(default)]
    pub networks: Vec<NetworkProfile>,
}

/// One OS-visible network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub handle: u64,
    #[serde(default)]
    pub legacy: Option<LegacyNetworkInfo>,
    #[serde(default)]
    pub capabilities: Option<CapabilityProfile>,
}

/// A recorded capability object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityProfile {
    #[serde(default)]
    pub transport_types: Vec<u32>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default = "unknown_bandwidth")]
    pub link_upstream_kbps: i32,
    #[serde(default = "unknown_bandwidth")]
    pub link_downstream_kbps: i32,
    /// Internal attributes present on this platform variant; null means
    /// present but unset
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
    /// Internal attributes that exist but cannot be read
    #[serde(default)]
    pub inaccessible: Vec<String>,
}

fn unknown_bandwidth() -> i32 {
    -1
}

/// Window metrics answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowProfile {
    #[serde(default)]
    pub visible_display_frame_top: Option<i32>,
    #[serde(default)]
    pub status_bar_height_resource: Option<i32>,
}

impl DeviceProfile {
    /// Load a profile, picking the format from the file extension
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, its extension is not
    /// `yaml`, `yml` or `json`, or its content does not parse
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !matches!(extension.as_str(), "yaml" | "yml" | "json") {
            return Err(FixtureError::UnsupportedFormat(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "Read device profile");

        if extension == "json" {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, FixtureError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Builds the per-request platform bundle recorded by this profile
    pub fn into_services(self) -> PlatformServices {
        let mut services = PlatformServices::new(
            self.api_level,
            Arc::new(FixtureDevice::new(self.device, self.api_level)),
            Arc::new(FixturePermissions::new(self.permissions)),
        );
        if let Some(connectivity) = self.connectivity {
            services = services.with_connectivity(Arc::new(FixtureConnectivity::new(connectivity)));
        }
        if let Some(telephony) = self.telephony {
            services = services.with_telephony(Arc::new(FixtureTelephony::new(telephony)));
        }
        if let Some(window) = self.window {
            services = services.with_window(Arc::new(FixtureWindow::new(window)));
        }
        services
    }
}
