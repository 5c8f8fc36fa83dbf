//! Profile-file platform provider

use std::path::{Path, PathBuf};

use anyhow::Context;
use droidinfo_core::ports::{IPlatformProvider, PlatformServices};
use tracing::debug;

use crate::profile::DeviceProfile;

/// `IPlatformProvider` that re-reads a profile file on every `open()`
#[derive(Debug, Clone)]
pub struct FixturePlatformProvider {
    path: PathBuf,
}

impl FixturePlatformProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IPlatformProvider for FixturePlatformProvider {
    fn open(&self) -> anyhow::Result<PlatformServices> {
        let profile = DeviceProfile::load(&self.path)
            .with_context(|| format!("Failed to load device profile {}", self.path.display()))?;
        debug!(
            path = %self.path.display(),
            api_level = profile.api_level,
            "Opened platform services from profile"
        );
        Ok(profile.into_services())
    }
}
