//! System bars command - Print the status bar height

use anyhow::{Context, Result};
use clap::Args;
use droidinfo_core::usecases::SystemBarsUseCase;

use super::CliContext;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct SystemBarsCommand {}

impl SystemBarsCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);
        let config = ctx.load_config()?;
        let bars = SystemBarsUseCase::new(ctx.open_platform(&config)?).build();

        if ctx.format == OutputFormat::Json {
            let json = serde_json::to_value(bars).context("Failed to encode system bars")?;
            formatter.print_json(&json);
        } else {
            formatter.success(&format!("Status bar height: {} px", bars.status_bar));
        }
        Ok(())
    }
}
