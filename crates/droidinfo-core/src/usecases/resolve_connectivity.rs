//! Connectivity-state resolution
//!
//! Resolves the state of one network through one of two strategies, picked
//! once per request from the platform API level:
//!
//! - **Legacy**: copies the legacy info object of the network verbatim.
//! - **Modern**: gated on the phone-state permission (see
//!   [`TelephonyReadPolicy`]); reads the telephony data state and signal
//!   level, then classifies the transport of the *active* network.
//!
//! Both strategies then attach the capability metadata of the resolved
//! network itself. Missing services or objects degrade to absent/null fields;
//! resolution never fails.

use tracing::{debug, warn};

use crate::config::NetworkConfig;
use crate::domain::{
    null_if_empty, CellState, ConnectivityRecord, DataState, LegacyState, TelephonyReadPolicy,
    TransportDescriptor,
};
use crate::ports::{LegacyNetworkInfo, NetworkHandle, PlatformServices, READ_PHONE_STATE};

use super::capabilities::capabilities_of;

/// First API level that uses the capability strategy by default
pub const MODERN_API_LEVEL: u32 = 29;

/// Resolution strategy for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// Legacy info-object strategy
    Legacy,
    /// Capability + permission-gated telephony strategy
    Modern(TelephonyReadPolicy),
}

impl ResolutionStrategy {
    /// Picks the strategy for `api_level`
    pub fn select(api_level: u32, config: &NetworkConfig) -> Self {
        if api_level >= config.modern_api_level {
            ResolutionStrategy::Modern(config.telephony_read)
        } else {
            ResolutionStrategy::Legacy
        }
    }
}

/// Resolves connectivity records for the networks of one platform
pub struct ConnectivityResolver {
    platform: PlatformServices,
    strategy: ResolutionStrategy,
}

impl ConnectivityResolver {
    /// Creates a resolver; the strategy is fixed for its whole lifetime
    pub fn new(platform: PlatformServices, config: &NetworkConfig) -> Self {
        let strategy = ResolutionStrategy::select(platform.api_level, config);
        debug!(api_level = platform.api_level, ?strategy, "Selected connectivity strategy");
        Self { platform, strategy }
    }

    pub fn strategy(&self) -> ResolutionStrategy {
        self.strategy
    }

    /// Resolves the record of `network`, including its capability metadata
    pub fn resolve(&self, network: NetworkHandle) -> ConnectivityRecord {
        let record = match self.strategy {
            ResolutionStrategy::Legacy => self.resolve_legacy(network),
            ResolutionStrategy::Modern(policy) => self.resolve_modern(policy),
        };

        let capabilities = self
            .platform
            .connectivity
            .as_deref()
            .and_then(|connectivity| capabilities_of(connectivity, network));
        if capabilities.is_none() {
            debug!(%network, "No capability data for network");
        }

        record.with_capabilities(capabilities)
    }

    fn resolve_legacy(&self, network: NetworkHandle) -> ConnectivityRecord {
        let Some(connectivity) = self.platform.connectivity.as_deref() else {
            return ConnectivityRecord::new();
        };
        match connectivity.legacy_info_of(network) {
            Some(info) => legacy_record(info),
            None => {
                debug!(%network, "No legacy info object for network");
                ConnectivityRecord::new()
            }
        }
    }

    fn resolve_modern(&self, policy: TelephonyReadPolicy) -> ConnectivityRecord {
        let granted = self.platform.permissions.has_permission(READ_PHONE_STATE);
        if !policy.should_read(granted) {
            debug!(granted, %policy, "Skipping telephony and active network fields");
            return ConnectivityRecord::new();
        }

        let mut record = ConnectivityRecord::new();

        match self.platform.telephony.as_deref() {
            Some(telephony) => {
                record.cell = Some(CellState {
                    cell_state: DataState::from_code(telephony.data_state()),
                    cell_signal_strength: telephony.signal_level(),
                });
            }
            None => warn!("Telephony service unavailable, cell fields omitted"),
        }

        match self.active_transport() {
            Some(transport) => record.with_transport(transport),
            None => record,
        }
    }

    /// Classifies the transport of the currently active network
    fn active_transport(&self) -> Option<TransportDescriptor> {
        let connectivity = self.platform.connectivity.as_deref()?;
        let active = connectivity.active_network()?;
        let caps = connectivity.capabilities_of(active)?;
        Some(caps.primary_transport())
    }
}

/// Maps a legacy info object onto a record; only `extraInfo` is null-formatted
fn legacy_record(info: LegacyNetworkInfo) -> ConnectivityRecord {
    ConnectivityRecord {
        type_code: Some(i64::from(info.type_code)),
        type_name: Some(info.type_name),
        legacy: Some(LegacyState {
            subtype: info.subtype,
            subtype_name: info.subtype_name,
            is_connected: info.is_connected,
            detailed_state: info.detailed_state,
            state: info.state,
            extra_info: null_if_empty(info.extra_info),
            is_available: info.is_available,
            is_failover: info.is_failover,
            is_roaming: info.is_roaming,
        }),
        ..Default::default()
    }
}
