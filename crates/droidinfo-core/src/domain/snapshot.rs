//! Device snapshot aggregate
//!
//! A [`DeviceSnapshot`] is built fresh for every request, encoded once and
//! dropped. It has no identity and is never persisted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::connectivity::ConnectivityRecord;
use super::errors::DomainError;

/// Physical display size in pixels
///
/// Serialized as `"<width>x<height>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

impl DisplaySize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for DisplaySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for DisplaySize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidDisplaySize(s.to_string());
        let (width, height) = s.trim().split_once('x').ok_or_else(invalid)?;
        Ok(Self {
            width: width.trim().parse().map_err(|_| invalid())?,
            height: height.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for DisplaySize {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplaySize> for String {
    fn from(size: DisplaySize) -> Self {
        size.to_string()
    }
}

/// The complete response body of one device-info request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    pub android_id: String,
    pub manufacturer: String,
    pub model: String,
    pub brand: String,
    pub api_version: String,
    pub platform_version: String,
    pub carrier_name: Option<String>,
    pub real_display_size: DisplaySize,
    pub display_density: f64,
    pub networks: Vec<ConnectivityRecord>,
    pub locale: String,
    pub time_zone: String,
}

impl DeviceSnapshot {
    /// The fixed top-level key set of the encoded snapshot, in order
    pub const KEYS: [&'static str; 12] = [
        "androidId",
        "manufacturer",
        "model",
        "brand",
        "apiVersion",
        "platformVersion",
        "carrierName",
        "realDisplaySize",
        "displayDensity",
        "networks",
        "locale",
        "timeZone",
    ];

    /// Encodes the snapshot as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Serialization`] if encoding fails; this is the
    /// only failure that propagates out of a snapshot request.
    pub fn to_json(&self) -> Result<Value, DomainError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Response body of a system-bars request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemBars {
    /// Status bar height in pixels
    pub status_bar: i32,
}
