//! Use cases (interactors) for droidinfo
//!
//! This module contains the request-scoped use cases that combine domain
//! rules with the platform ports. Each one is built from a fresh
//! [`PlatformServices`](crate::ports::PlatformServices) bundle, runs to
//! completion synchronously and is dropped with the request.
//!
//! ## Use Cases
//!
//! - [`ConnectivityResolver`] - Per-network state via the legacy or capability strategy
//! - [`NetworkReportUseCase`] - Resolves every known network and drops empty records
//! - [`DeviceSnapshotUseCase`] - Composes identity, display, locale and network report
//! - [`SystemBarsUseCase`] - Status bar height

pub mod capabilities;
pub mod device_snapshot;
pub mod network_report;
pub mod resolve_connectivity;
pub mod system_bars;

#[cfg(test)]
pub(crate) mod test_support;

pub use capabilities::{capture_capabilities, extract_safe_value};
pub use device_snapshot::DeviceSnapshotUseCase;
pub use network_report::NetworkReportUseCase;
pub use resolve_connectivity::{ConnectivityResolver, ResolutionStrategy};
pub use system_bars::SystemBarsUseCase;
