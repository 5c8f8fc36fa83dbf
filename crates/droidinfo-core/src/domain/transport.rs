//! Transport vocabulary and primary-transport classification
//!
//! The vocabulary order matches the platform's transport constants, so a
//! vocabulary index is also the platform transport code.

use serde::Serialize;

/// Fixed, ordered transport vocabulary
pub const TRANSPORT_NAMES: [&str; 8] = [
    "CELLULAR",
    "WIFI",
    "BLUETOOTH",
    "ETHERNET",
    "VPN",
    "WIFI_AWARE",
    "LOWPAN",
    "TEST",
];

/// Code reported when no vocabulary transport matches (the vocabulary length)
pub const UNKNOWN_TRANSPORT_CODE: u32 = TRANSPORT_NAMES.len() as u32;

/// Name reported when no vocabulary transport matches
pub const UNKNOWN_TRANSPORT_NAME: &str = "UNKNOWN";

/// Canonical classification of a network's primary transport
///
/// `code` is always within `0..=UNKNOWN_TRANSPORT_CODE`; the upper bound is
/// only ever paired with `"UNKNOWN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransportDescriptor {
    pub code: u32,
    pub name: &'static str,
}

impl TransportDescriptor {
    /// The descriptor used when no known transport is advertised
    pub const fn unknown() -> Self {
        Self {
            code: UNKNOWN_TRANSPORT_CODE,
            name: UNKNOWN_TRANSPORT_NAME,
        }
    }

    /// Classifies a network by scanning the vocabulary in order.
    ///
    /// The first index for which `has_transport` holds wins, even when the
    /// network advertises several transports.
    pub fn classify(has_transport: impl Fn(u32) -> bool) -> Self {
        (0u32..)
            .zip(TRANSPORT_NAMES)
            .find(|(code, _)| has_transport(*code))
            .map_or_else(Self::unknown, |(code, name)| Self { code, name })
    }
}

impl std::fmt::Display for TransportDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
