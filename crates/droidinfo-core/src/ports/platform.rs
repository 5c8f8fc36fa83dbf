//! Per-request platform bundle
//!
//! [`PlatformServices`] is the explicit dependency handed to the snapshot use
//! cases. An [`IPlatformProvider`] creates a fresh bundle for every request, so
//! no mutable state is shared between requests.

use std::sync::Arc;

use super::{
    IConnectivityService, IDeviceProperties, IPermissionChecker, ITelephonyService,
    IWindowMetrics,
};

/// Collaborators and platform context for one request
///
/// Services that may be missing on a device are optional; a missing service
/// degrades only the field group it feeds.
#[derive(Clone)]
pub struct PlatformServices {
    /// Platform API level, selects the connectivity resolution strategy
    pub api_level: u32,
    pub device: Arc<dyn IDeviceProperties>,
    pub permissions: Arc<dyn IPermissionChecker>,
    pub connectivity: Option<Arc<dyn IConnectivityService>>,
    pub telephony: Option<Arc<dyn ITelephonyService>>,
    pub window: Option<Arc<dyn IWindowMetrics>>,
}

impl PlatformServices {
    /// Creates a bundle with only the mandatory services
    pub fn new(
        api_level: u32,
        device: Arc<dyn IDeviceProperties>,
        permissions: Arc<dyn IPermissionChecker>,
    ) -> Self {
        Self {
            api_level,
            device,
            permissions,
            connectivity: None,
            telephony: None,
            window: None,
        }
    }

    pub fn with_connectivity(mut self, connectivity: Arc<dyn IConnectivityService>) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    pub fn with_telephony(mut self, telephony: Arc<dyn ITelephonyService>) -> Self {
        self.telephony = Some(telephony);
        self
    }

    pub fn with_window(mut self, window: Arc<dyn IWindowMetrics>) -> Self {
        self.window = Some(window);
        self
    }
}

impl std::fmt::Debug for PlatformServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformServices")
            .field("api_level", &self.api_level)
            .field("connectivity", &self.connectivity.is_some())
            .field("telephony", &self.telephony.is_some())
            .field("window", &self.window.is_some())
            .finish_non_exhaustive()
    }
}

/// Port trait for opening a platform bundle
///
/// Called once per request by the request-handling layer, which owns the
/// bundle's lifetime.
pub trait IPlatformProvider: Send + Sync {
    /// Opens a fresh set of platform services
    ///
    /// The HTTP server calls this from the blocking pool, so implementations
    /// may read files or talk to a device synchronously.
    ///
    /// # Errors
    /// Returns an error if the platform cannot be reached at all (for a
    /// recorded profile: the file cannot be read or parsed)
    fn open(&self) -> anyhow::Result<PlatformServices>;
}
