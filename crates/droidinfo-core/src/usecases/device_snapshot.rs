//! Device snapshot use case
//!
//! Composes the response body of a device-info request: identity, display
//! and locale getters copied from the device properties port, plus the
//! network report.

use serde_json::Value;
use tracing::{debug, info};

use crate::config::NetworkConfig;
use crate::domain::{null_if_empty, DeviceSnapshot, DomainError};
use crate::ports::PlatformServices;

use super::network_report::NetworkReportUseCase;

/// Use case building one [`DeviceSnapshot`]
pub struct DeviceSnapshotUseCase {
    platform: PlatformServices,
    network_report: NetworkReportUseCase,
}

impl DeviceSnapshotUseCase {
    /// Creates a new DeviceSnapshotUseCase with the required dependencies
    ///
    /// # Arguments
    ///
    /// * `platform` - Platform services opened for this request
    /// * `config` - Network report settings
    pub fn new(platform: PlatformServices, config: &NetworkConfig) -> Self {
        Self {
            network_report: NetworkReportUseCase::new(platform.clone(), config),
            platform,
        }
    }

    /// Builds the snapshot
    ///
    /// Never fails: unavailable optional data is reported as null field by field.
    pub fn build(&self) -> DeviceSnapshot {
        let device = self.platform.device.as_ref();
        let networks = self.network_report.report();
        debug!(networks = networks.len(), "Network report built");

        DeviceSnapshot {
            android_id: device.android_id(),
            manufacturer: device.manufacturer(),
            model: device.model(),
            brand: device.brand(),
            api_version: device.api_version(),
            platform_version: device.platform_version(),
            carrier_name: null_if_empty(device.carrier_name()),
            real_display_size: device.real_display_size(),
            display_density: device.display_density(),
            networks,
            locale: device.locale(),
            time_zone: device.time_zone(),
        }
    }

    /// Builds the snapshot and encodes it as JSON
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Serialization`] if the snapshot cannot be encoded.
    pub fn build_json(&self) -> Result<Value, DomainError> {
        info!(api_level = self.platform.api_level, "Building device snapshot");
        self.build().to_json()
    }
}
