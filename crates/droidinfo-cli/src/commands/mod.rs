//! CLI subcommands

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use droidinfo_core::config::Config;
use droidinfo_core::ports::{IPlatformProvider, PlatformServices};
use droidinfo_fixture::FixturePlatformProvider;
use tracing::debug;

use crate::output::OutputFormat;

pub mod completions;
pub mod config;
pub mod info;
pub mod networks;
pub mod system_bars;

/// Global options shared by every subcommand
#[derive(Debug, Clone)]
pub struct CliContext {
    pub format: OutputFormat,
    /// Explicit `--config`; `None` means the default location
    config_path: Option<PathBuf>,
    profile: Option<PathBuf>,
}

impl CliContext {
    pub fn new(
        format: OutputFormat,
        config_path: Option<PathBuf>,
        profile: Option<PathBuf>,
    ) -> Self {
        Self {
            format,
            config_path,
            profile,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(Config::default_path)
    }

    /// Loads the configuration; an explicit `--config` must exist and parse.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config_path {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            None => Ok(Config::load_or_default(&Config::default_path())),
        }
    }

    /// Opens the platform services of the selected profile.
    pub fn open_platform(&self, config: &Config) -> Result<PlatformServices> {
        let Some(profile) = self.profile.clone().or_else(|| config.device.profile.clone())
        else {
            bail!("No device profile given; pass --profile or set device.profile");
        };
        debug!(profile = %profile.display(), "Opening device profile");
        FixturePlatformProvider::new(profile).open()
    }
}
