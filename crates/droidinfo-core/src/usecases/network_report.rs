//! Network report use case
//!
//! Resolves every network the platform knows about, in platform order, and
//! keeps only records with at least one populated field.

use std::sync::Arc;

use tracing::debug;

use crate::config::NetworkConfig;
use crate::domain::ConnectivityRecord;
use crate::ports::{IConnectivityService, NetworkHandle, PlatformServices};

use super::resolve_connectivity::ConnectivityResolver;

/// Use case building the `networks` section of a snapshot
pub struct NetworkReportUseCase {
    connectivity: Option<Arc<dyn IConnectivityService>>,
    resolver: ConnectivityResolver,
}

impl NetworkReportUseCase {
    /// Creates a new NetworkReportUseCase for one request
    ///
    /// # Arguments
    ///
    /// * `platform` - Platform services of the current request
    /// * `config` - Strategy threshold and telephony read policy
    pub fn new(platform: PlatformServices, config: &NetworkConfig) -> Self {
        Self {
            connectivity: platform.connectivity.clone(),
            resolver: ConnectivityResolver::new(platform, config),
        }
    }

    /// Resolves `networks` in order, dropping empty records
    pub fn build_report(&self, networks: &[NetworkHandle]) -> Vec<ConnectivityRecord> {
        let mut report = Vec::with_capacity(networks.len());
        for &network in networks {
            let record = self.resolver.resolve(network);
            if record.is_empty() {
                debug!(%network, "Dropping empty connectivity record");
                continue;
            }
            report.push(record);
        }
        report
    }

    /// Enumerates the platform's networks and builds their report
    ///
    /// Without a connectivity service there is nothing to enumerate and the
    /// report is empty.
    pub fn report(&self) -> Vec<ConnectivityRecord> {
        let networks = self
            .connectivity
            .as_deref()
            .map(|connectivity| connectivity.list_networks())
            .unwrap_or_default();
        debug!(count = networks.len(), "Enumerated networks");
        self.build_report(&networks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{
        legacy_wifi, platform, FakeCaps, FakeConnectivity, FakeNetwork, FakeTelephony,
    };

    fn connectivity() -> FakeConnectivity {
        FakeConnectivity {
            networks: vec![
                FakeNetwork {
                    handle: 1,
                    legacy: Some(legacy_wifi(true, false)),
                    caps: None,
                },
                // Nothing known about this one: its record is empty.
                FakeNetwork {
                    handle: 2,
                    legacy: None,
                    caps: None,
                },
                FakeNetwork {
                    handle: 3,
                    legacy: None,
                    caps: Some(FakeCaps::with_transports(&[3])),
                },
            ],
            active: None,
        }
    }

    #[test]
    fn test_empty_records_are_dropped() {
        let usecase = NetworkReportUseCase::new(
            platform(28, false, Some(connectivity()), None),
            &NetworkConfig::default(),
        );
        let report = usecase.report();

        assert_eq!(report.len(), 2);
        assert!(report[0].legacy.is_some());
        assert!(report[0].capabilities.is_none());
        assert_eq!(
            report[1].capabilities.as_ref().map(|c| c.transport_types.clone()),
            Some(vec![3])
        );
    }

    #[test]
    fn test_order_follows_input() {
        let usecase = NetworkReportUseCase::new(
            platform(28, false, Some(connectivity()), None),
            &NetworkConfig::default(),
        );
        let report = usecase.build_report(&[NetworkHandle::new(3), NetworkHandle::new(1)]);
        assert_eq!(report.len(), 2);
        assert!(report[0].legacy.is_none());
        assert!(report[1].legacy.is_some());
    }

    #[test]
    fn test_no_networks() {
        let usecase = NetworkReportUseCase::new(
            platform(33, false, Some(FakeConnectivity::default()), None),
            &NetworkConfig::default(),
        );
        assert!(usecase.report().is_empty());
    }

    #[test]
    fn test_no_connectivity_service() {
        let usecase =
            NetworkReportUseCase::new(platform(33, false, None, None), &NetworkConfig::default());
        assert!(usecase.report().is_empty());
    }

    #[test]
    fn test_modern_records_without_capabilities_kept_when_cell_state_present() {
        let mut connectivity = connectivity();
        connectivity.networks.truncate(2);
        let usecase = NetworkReportUseCase::new(
            platform(
                30,
                false,
                Some(connectivity),
                Some(FakeTelephony {
                    data_state: 0,
                    signal_level: None,
                }),
            ),
            &NetworkConfig::default(),
        );
        // Both networks carry cell state, so neither record is empty.
        assert_eq!(usecase.report().len(), 2);
    }
}
