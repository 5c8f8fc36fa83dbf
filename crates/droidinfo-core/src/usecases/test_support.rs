//! In-memory port implementations shared by the use-case tests

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::domain::{DetailedState, DisplaySize, FieldAccessError, NetworkState};
use crate::ports::{
    ICapabilityObject, IConnectivityService, IDeviceProperties, IPermissionChecker,
    ITelephonyService, IWindowMetrics, LegacyNetworkInfo, NetworkHandle, PlatformServices,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeCaps {
    pub transports: Vec<u32>,
    pub names: Vec<String>,
    pub up_kbps: i32,
    pub down_kbps: i32,
    pub fields: HashMap<String, Option<Value>>,
}

impl FakeCaps {
    pub fn with_transports(transports: &[u32]) -> Self {
        Self {
            transports: transports.to_vec(),
            up_kbps: -1,
            down_kbps: -1,
            ..Default::default()
        }
    }

    pub fn field(mut self, name: &str, value: Option<Value>) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }
}

impl ICapabilityObject for FakeCaps {
    fn has_transport(&self, code: u32) -> bool {
        self.transports.contains(&code)
    }

    fn transport_types(&self) -> Vec<u32> {
        self.transports.clone()
    }

    fn capability_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn link_upstream_bandwidth_kbps(&self) -> i32 {
        self.up_kbps
    }

    fn link_downstream_bandwidth_kbps(&self) -> i32 {
        self.down_kbps
    }

    fn read_field(&self, name: &str) -> Result<Option<Value>, FieldAccessError> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| FieldAccessError::Missing(name.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeNetwork {
    pub handle: u64,
    pub legacy: Option<LegacyNetworkInfo>,
    pub caps: Option<FakeCaps>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeConnectivity {
    pub networks: Vec<FakeNetwork>,
    pub active: Option<u64>,
}

impl FakeConnectivity {
    fn find(&self, network: NetworkHandle) -> Option<&FakeNetwork> {
        self.networks.iter().find(|n| n.handle == network.raw())
    }
}

impl IConnectivityService for FakeConnectivity {
    fn list_networks(&self) -> Vec<NetworkHandle> {
        self.networks
            .iter()
            .map(|n| NetworkHandle::new(n.handle))
            .collect()
    }

    fn active_network(&self) -> Option<NetworkHandle> {
        self.active.map(NetworkHandle::new)
    }

    fn capabilities_of(&self, network: NetworkHandle) -> Option<Box<dyn ICapabilityObject>> {
        self.find(network)
            .and_then(|n| n.caps.clone())
            .map(|caps| Box::new(caps) as Box<dyn ICapabilityObject>)
    }

    fn legacy_info_of(&self, network: NetworkHandle) -> Option<LegacyNetworkInfo> {
        self.find(network).and_then(|n| n.legacy.clone())
    }
}

pub(crate) struct FakeDevice;

impl IDeviceProperties for FakeDevice {
    fn android_id(&self) -> String {
        "a1b2c3d4e5f60718".to_string()
    }
    fn manufacturer(&self) -> String {
        "Google".to_string()
    }
    fn model(&self) -> String {
        "sdk_gphone64_x86_64".to_string()
    }
    fn brand(&self) -> String {
        "google".to_string()
    }
    fn api_version(&self) -> String {
        "33".to_string()
    }
    fn platform_version(&self) -> String {
        "13".to_string()
    }
    fn carrier_name(&self) -> Option<String> {
        Some(String::new())
    }
    fn real_display_size(&self) -> DisplaySize {
        DisplaySize::new(1080, 2400)
    }
    fn display_density(&self) -> f64 {
        420.0
    }
    fn locale(&self) -> String {
        "en_US".to_string()
    }
    fn time_zone(&self) -> String {
        "UTC".to_string()
    }
}

pub(crate) struct FakePermissions(pub bool);

impl IPermissionChecker for FakePermissions {
    fn has_permission(&self, _permission: &str) -> bool {
        self.0
    }
}

pub(crate) struct FakeTelephony {
    pub data_state: i32,
    pub signal_level: Option<i32>,
}

impl ITelephonyService for FakeTelephony {
    fn data_state(&self) -> i32 {
        self.data_state
    }

    fn signal_level(&self) -> Option<i32> {
        self.signal_level
    }
}

pub(crate) struct FakeWindow {
    pub frame_top: Option<i32>,
    pub resource: Option<i32>,
}

impl IWindowMetrics for FakeWindow {
    fn visible_display_frame_top(&self) -> Option<i32> {
        self.frame_top
    }

    fn status_bar_height_resource(&self) -> Option<i32> {
        self.resource
    }
}

pub(crate) fn legacy_wifi(is_connected: bool, is_roaming: bool) -> LegacyNetworkInfo {
    LegacyNetworkInfo {
        type_code: 1,
        type_name: "WIFI".to_string(),
        subtype: 0,
        subtype_name: String::new(),
        is_connected,
        is_available: true,
        is_failover: false,
        is_roaming,
        state: NetworkState::Connected,
        detailed_state: DetailedState::Connected,
        extra_info: Some(String::new()),
    }
}

pub(crate) fn platform(
    api_level: u32,
    permission_granted: bool,
    connectivity: Option<FakeConnectivity>,
    telephony: Option<FakeTelephony>,
) -> PlatformServices {
    let mut services = PlatformServices::new(
        api_level,
        Arc::new(FakeDevice),
        Arc::new(FakePermissions(permission_granted)),
    );
    if let Some(connectivity) = connectivity {
        services = services.with_connectivity(Arc::new(connectivity));
    }
    if let Some(telephony) = telephony {
        services = services.with_telephony(Arc::new(telephony));
    }
    services
}
