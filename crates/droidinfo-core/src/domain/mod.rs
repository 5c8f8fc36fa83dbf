//! Domain types and normalization rules
//!
//! This module contains the core domain types for droidinfo:
//! - The fixed transport vocabulary and its classifier
//! - Capability metadata captured per network
//! - Per-network connectivity records and platform state enums
//! - The device snapshot aggregate returned by the endpoint
//! - Domain-specific error types

pub mod capabilities;
pub mod connectivity;
pub mod errors;
pub mod snapshot;
pub mod transport;

pub use capabilities::{format_null, null_if_empty, CapabilitySnapshot};
pub use connectivity::{
    CellState, ConnectivityRecord, DataState, DetailedState, LegacyState, NetworkState,
    TelephonyReadPolicy,
};
pub use errors::{DomainError, FieldAccessError};
pub use snapshot::{DeviceSnapshot, DisplaySize, SystemBars};
pub use transport::{TransportDescriptor, TRANSPORT_NAMES, UNKNOWN_TRANSPORT_CODE};
