//! Connectivity port (driven/secondary port)
//!
//! This module defines the interface for enumerating networks and reading
//! their legacy info objects and capability objects.
//!
//! ## Design Notes
//!
//! - There is no callback registration on this port. The active network is
//!   a one-shot query, so nothing registered during a request outlives it.
//! - `LegacyNetworkInfo` is a port-level DTO; the connectivity resolver maps
//!   it onto [`LegacyState`](crate::domain::LegacyState).
//! - Capability objects expose their internal attributes through
//!   [`ICapabilityObject::read_field`], implemented per platform variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DetailedState, FieldAccessError, NetworkState, TransportDescriptor};

// ============================================================================
// NetworkHandle
// ============================================================================

/// Opaque identifier of one OS-visible network
///
/// Owned by the platform; only valid for the duration of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkHandle(u64);

impl NetworkHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NetworkHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// LegacyNetworkInfo
// ============================================================================

/// Legacy per-network info object, available on older platform versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyNetworkInfo {
    /// Legacy network type code (e.g. 0 = MOBILE, 1 = WIFI)
    #[serde(rename = "type")]
    pub type_code: i32,
    pub type_name: String,
    #[serde(default)]
    pub subtype: i32,
    #[serde(default)]
    pub subtype_name: String,
    pub is_connected: bool,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub is_failover: bool,
    #[serde(default)]
    pub is_roaming: bool,
    pub state: NetworkState,
    pub detailed_state: DetailedState,
    #[serde(default)]
    pub extra_info: Option<String>,
}

// ============================================================================
// ICapabilityObject
// ============================================================================

/// Port trait for a platform capability object
///
/// Only `read_field` is fallible: it reaches attributes that have no public
/// accessor on every platform version. Callers go through the safe extractor
/// rather than handling its errors.
pub trait ICapabilityObject: Send + Sync {
    /// Returns true if the network advertises transport `code`
    fn has_transport(&self, code: u32) -> bool;

    /// Every transport code the network advertises
    fn transport_types(&self) -> Vec<u32>;

    /// Names of the boolean capabilities currently set
    fn capability_names(&self) -> Vec<String>;

    /// Upstream bandwidth estimate in kbps
    fn link_upstream_bandwidth_kbps(&self) -> i32;

    /// Downstream bandwidth estimate in kbps
    fn link_downstream_bandwidth_kbps(&self) -> i32;

    /// Reads an internal attribute by name.
    ///
    /// # Returns
    /// `Ok(Some(value))` if the attribute holds a value, `Ok(None)` if it is
    /// present but unset
    ///
    /// # Errors
    /// A [`FieldAccessError`] if the attribute is absent or unreadable
    fn read_field(&self, name: &str) -> Result<Option<Value>, FieldAccessError>;

    /// Classifies the primary transport (lowest vocabulary index wins)
    fn primary_transport(&self) -> TransportDescriptor {
        TransportDescriptor::classify(|code| self.has_transport(code))
    }
}

// ============================================================================
// IConnectivityService
// ============================================================================

/// Port trait for network enumeration and lookups
pub trait IConnectivityService: Send + Sync {
    /// All networks currently known to the platform, in platform order
    fn list_networks(&self) -> Vec<NetworkHandle>;

    /// The network that currently carries default traffic, if any
    fn active_network(&self) -> Option<NetworkHandle>;

    /// Capability object of `network`; `None` if the platform has none
    /// (for instance because the network just went away)
    fn capabilities_of(&self, network: NetworkHandle) -> Option<Box<dyn ICapabilityObject>>;

    /// Legacy info object of `network`; `None` when unavailable
    fn legacy_info_of(&self, network: NetworkHandle) -> Option<LegacyNetworkInfo>;
}
