//! droidinfo Core - Domain logic for the device snapshot endpoint
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain types** - `TransportDescriptor`, `CapabilitySnapshot`, `ConnectivityRecord`, `DeviceSnapshot`
//! - **Use cases** - `ConnectivityResolver`, `NetworkReportUseCase`, `DeviceSnapshotUseCase`, `SystemBarsUseCase`
//! - **Port definitions** - Traits for adapters: `IDeviceProperties`, `IConnectivityService`,
//!   `ICapabilityObject`, `ITelephonyService`, `IPermissionChecker`, `IWindowMetrics`
//!
//! # Architecture
//!
//! The domain module holds plain data and normalization rules with no I/O.
//! Ports define the collaborator interfaces that a platform adapter implements.
//! Use cases combine both into a single synchronous, request-scoped snapshot.

pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
