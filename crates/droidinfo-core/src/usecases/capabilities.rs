//! Capability metadata extraction
//!
//! Holds the safe field extractor, the single place where unreadable
//! capability attributes are tolerated, and the capture of a
//! [`CapabilitySnapshot`] from a capability object.

use serde_json::Value;
use tracing::trace;

use crate::domain::{format_null, CapabilitySnapshot};
use crate::ports::{ICapabilityObject, IConnectivityService, NetworkHandle};

/// Internal attribute holding the signal strength
pub const SIGNAL_STRENGTH_FIELD: &str = "mSignalStrength";

/// Internal attribute holding the network specifier
pub const NETWORK_SPECIFIER_FIELD: &str = "mNetworkSpecifier";

/// Internal attribute holding the Wi-Fi SSID
pub const SSID_FIELD: &str = "mSSID";

/// Reads an internal attribute, reporting JSON null on any failure.
///
/// Never fails: absent, inaccessible and mistyped attributes all become
/// `Value::Null`, and so does an empty string value.
pub fn extract_safe_value(field_name: &str, source: &dyn ICapabilityObject) -> Value {
    match source.read_field(field_name) {
        Ok(Some(value)) => format_null(value),
        Ok(None) => Value::Null,
        Err(e) => {
            trace!(field = field_name, error = %e, "Capability field unavailable");
            Value::Null
        }
    }
}

/// Captures the capability metadata of one capability object
pub fn capture_capabilities(source: &dyn ICapabilityObject) -> CapabilitySnapshot {
    CapabilitySnapshot {
        transport_types: source.transport_types(),
        capability_names: source.capability_names(),
        link_upstream_kbps: source.link_upstream_bandwidth_kbps(),
        link_downstream_kbps: source.link_downstream_bandwidth_kbps(),
        signal_strength: extract_safe_value(SIGNAL_STRENGTH_FIELD, source),
        network_specifier: extract_safe_value(NETWORK_SPECIFIER_FIELD, source),
        ssid: extract_safe_value(SSID_FIELD, source),
    }
}

/// Looks up and captures the capability metadata of `network`.
///
/// Returns `None` when the platform has no capability object for it.
pub fn capabilities_of(
    connectivity: &dyn IConnectivityService,
    network: NetworkHandle,
) -> Option<CapabilitySnapshot> {
    connectivity
        .capabilities_of(network)
        .map(|caps| capture_capabilities(caps.as_ref()))
}
