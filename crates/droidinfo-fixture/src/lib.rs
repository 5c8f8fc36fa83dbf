//! droidinfo Fixture - Recorded device profiles
//!
//! Implements every `droidinfo-core` port from a device profile recorded as
//! YAML or JSON, so the snapshot endpoint can run off-device and in tests.
//!
//! ## Architecture
//!
//! This crate is a driven (secondary) adapter in the hexagonal architecture.
//! [`FixturePlatformProvider`] implements `IPlatformProvider`: every `open()`
//! re-reads the profile file and builds a fresh `PlatformServices` bundle, so
//! nothing survives between requests and edits to the file are picked up
//! immediately.
//!
//! ## Key Components
//!
//! - [`DeviceProfile`] - The recorded profile document
//! - [`FixturePlatformProvider`] - `IPlatformProvider` backed by a profile file
//! - [`services`] - One port implementation per profile section
//! - [`FixtureError`] - Error types for loading profiles
//!
//! ## Usage
//!
//! ```no_run
//! use droidinfo_core::ports::IPlatformProvider;
//! use droidinfo_fixture::FixturePlatformProvider;
//!
//! # fn example() -> anyhow::Result<()> {
//! let provider = FixturePlatformProvider::new("profiles/pixel-7.yaml");
//! let platform = provider.open()?;
//! println!("API level {}", platform.api_level);
//! # Ok(())
//! # }
//! ```

pub mod profile;
pub mod provider;
pub mod services;

pub use profile::DeviceProfile;
pub use provider::FixturePlatformProvider;

/// Errors that can occur while loading a device profile
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The profile file could not be read
    #[error("Failed to read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The profile document is malformed
    #[error("Failed to parse profile: {0}")]
    Parse(String),

    /// The file extension is neither YAML nor JSON
    #[error("Unsupported profile format: {0}")]
    UnsupportedFormat(String),
}

impl From<serde_yaml::Error> for FixtureError {
    fn from(err: serde_yaml::Error) -> Self {
        FixtureError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        FixtureError::Parse(err.to_string())
    }
}
