//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the collaborator traits the snapshot use cases depend
//! on. Implementations live in adapter crates (for example the recorded
//! device profile in `droidinfo-fixture`).
//!
//! ## Ports Overview
//!
//! - [`IDeviceProperties`] - Identity, display and locale getters
//! - [`IConnectivityService`] - Network enumeration and per-network lookups
//! - [`ICapabilityObject`] - Opaque capability descriptor of one network
//! - [`ITelephonyService`] - Data-connection state and signal level
//! - [`IPermissionChecker`] - Runtime permission checks
//! - [`IWindowMetrics`] - Window geometry used for the status bar height
//! - [`IPlatformProvider`] - Creates a fresh [`PlatformServices`] bundle per request
//!
//! All ports are synchronous: a snapshot runs to completion without yielding.

pub mod connectivity;
pub mod device_properties;
pub mod permissions;
pub mod platform;
pub mod telephony;
pub mod window_metrics;

pub use connectivity::{ICapabilityObject, IConnectivityService, LegacyNetworkInfo, NetworkHandle};
pub use device_properties::IDeviceProperties;
pub use permissions::{IPermissionChecker, READ_PHONE_STATE};
pub use platform::{IPlatformProvider, PlatformServices};
pub use telephony::ITelephonyService;
pub use window_metrics::IWindowMetrics;
