//! Port implementations backed by profile sections

use std::collections::HashSet;

use droidinfo_core::domain::{DisplaySize, FieldAccessError};
use droidinfo_core::ports::{
    ICapabilityObject, IConnectivityService, IDeviceProperties, IPermissionChecker,
    ITelephonyService, IWindowMetrics, LegacyNetworkInfo, NetworkHandle,
};
use droidinfo_core::usecases::capabilities::SSID_FIELD;
use serde_json::Value;

use crate::profile::{
    CapabilityProfile, ConnectivityProfile, DeviceIdentity, NetworkProfile, TelephonyProfile,
    WindowProfile,
};

// ============================================================================
// Device properties
// ============================================================================

pub struct FixtureDevice {
    identity: DeviceIdentity,
    api_level: u32,
}

impl FixtureDevice {
    pub fn new(identity: DeviceIdentity, api_level: u32) -> Self {
        Self {
            identity,
            api_level,
        }
    }
}

impl IDeviceProperties for FixtureDevice {
    fn android_id(&self) -> String {
        self.identity.android_id.clone()
    }

    fn manufacturer(&self) -> String {
        self.identity.manufacturer.clone()
    }

    fn model(&self) -> String {
        self.identity.model.clone()
    }

    fn brand(&self) -> String {
        self.identity.brand.clone()
    }

    fn api_version(&self) -> String {
        self.identity
            .api_version
            .clone()
            .unwrap_or_else(|| self.api_level.to_string())
    }

    fn platform_version(&self) -> String {
        self.identity.platform_version.clone()
    }

    fn carrier_name(&self) -> Option<String> {
        self.identity.carrier_name.clone()
    }

    fn real_display_size(&self) -> DisplaySize {
        self.identity.real_display_size
    }

    fn display_density(&self) -> f64 {
        self.identity.display_density
    }

    fn locale(&self) -> String {
        self.identity.locale.clone()
    }

    fn time_zone(&self) -> String {
        self.identity.time_zone.clone()
    }
}

// ============================================================================
// Permissions
// ============================================================================

/// Grants exactly the permissions listed in the profile
pub struct FixturePermissions {
    granted: HashSet<String>,
}

impl FixturePermissions {
    pub fn new(granted: impl IntoIterator<Item = String>) -> Self {
        Self {
            granted: granted.into_iter().collect(),
        }
    }
}

impl IPermissionChecker for FixturePermissions {
    fn has_permission(&self, permission: &str) -> bool {
        self.granted.contains(permission)
    }
}

// ============================================================================
// Telephony
// ============================================================================

pub struct FixtureTelephony {
    profile: TelephonyProfile,
}

impl FixtureTelephony {
    pub fn new(profile: TelephonyProfile) -> Self {
        Self { profile }
    }
}

impl ITelephonyService for FixtureTelephony {
    fn data_state(&self) -> i32 {
        self.profile.data_state
    }

    fn signal_level(&self) -> Option<i32> {
        self.profile.signal_level
    }
}

// ============================================================================
// Window metrics
// ============================================================================

pub struct FixtureWindow {
    profile: WindowProfile,
}

impl FixtureWindow {
    pub fn new(profile: WindowProfile) -> Self {
        Self { profile }
    }
}

impl IWindowMetrics for FixtureWindow {
    fn visible_display_frame_top(&self) -> Option<i32> {
        self.profile.visible_display_frame_top
    }

    fn status_bar_height_resource(&self) -> Option<i32> {
        self.profile.status_bar_height_resource
    }
}

// ============================================================================
// Connectivity
// ============================================================================

pub struct FixtureConnectivity {
    profile: ConnectivityProfile,
}

impl FixtureConnectivity {
    pub fn new(profile: ConnectivityProfile) -> Self {
        Self { profile }
    }

    fn network(&self, handle: NetworkHandle) -> Option<&NetworkProfile> {
        self.profile
            .networks
            .iter()
            .find(|network| network.handle == handle.raw())
    }
}

impl IConnectivityService for FixtureConnectivity {
    fn list_networks(&self) -> Vec<NetworkHandle> {
        self.profile
            .networks
            .iter()
            .map(|network| NetworkHandle::new(network.handle))
            .collect()
    }

    fn active_network(&self) -> Option<NetworkHandle> {
        self.profile.active_network.map(NetworkHandle::new)
    }

    fn capabilities_of(&self, network: NetworkHandle) -> Option<Box<dyn ICapabilityObject>> {
        let caps = self.network(network)?.capabilities.clone()?;
        Some(Box::new(FixtureCapabilities::new(caps)))
    }

    fn legacy_info_of(&self, network: NetworkHandle) -> Option<LegacyNetworkInfo> {
        self.network(network)?.legacy.clone()
    }
}

/// A recorded capability object
///
/// `read_field` reproduces the platform variants: attributes absent from the
/// recording are missing, listed ones can be inaccessible, and an SSID that
/// is not a string has the wrong type.
pub struct FixtureCapabilities {
    profile: CapabilityProfile,
}

impl FixtureCapabilities {
    pub fn new(profile: CapabilityProfile) -> Self {
        Self { profile }
    }
}

impl ICapabilityObject for FixtureCapabilities {
    fn has_transport(&self, code: u32) -> bool {
        self.profile.transport_types.contains(&code)
    }

    fn transport_types(&self) -> Vec<u32> {
        self.profile.transport_types.clone()
    }

    fn capability_names(&self) -> Vec<String> {
        self.profile.capabilities.clone()
    }

    fn link_upstream_bandwidth_kbps(&self) -> i32 {
        self.profile.link_upstream_kbps
    }

    fn link_downstream_bandwidth_kbps(&self) -> i32 {
        self.profile.link_downstream_kbps
    }

    fn read_field(&self, name: &str) -> Result<Option<Value>, FieldAccessError> {
        if self.profile.inaccessible.iter().any(|field| field == name) {
            return Err(FieldAccessError::Inaccessible(name.to_string()));
        }
        match self.profile.fields.get(name) {
            None => Err(FieldAccessError::Missing(name.to_string())),
            Some(Value::Null) => Ok(None),
            Some(value) if name == SSID_FIELD && !value.is_string() => {
                Err(FieldAccessError::WrongType {
                    field: name.to_string(),
                    expected: "string".to_string(),
                })
            }
            Some(value) => Ok(Some(value.clone())),
        }
    }
}
