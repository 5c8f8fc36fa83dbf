//! Info command - Print the device snapshot
//!
//! `droidinfo info --json` prints exactly the `value` the HTTP endpoint
//! would return for the same profile.

use anyhow::{Context, Result};
use clap::Args;
use droidinfo_core::domain::DeviceSnapshot;
use droidinfo_core::usecases::DeviceSnapshotUseCase;

use super::networks::print_record;
use super::CliContext;
use crate::output::{get_formatter, or_null, OutputFormat, OutputFormatter};

#[derive(Debug, Args)]
pub struct InfoCommand {}

impl InfoCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);
        let config = ctx.load_config()?;
        let platform = ctx.open_platform(&config)?;
        let usecase = DeviceSnapshotUseCase::new(platform, &config.network);

        if ctx.format == OutputFormat::Json {
            let json = usecase
                .build_json()
                .context("Failed to encode device snapshot")?;
            formatter.print_json(&json);
        } else {
            print_snapshot(&usecase.build(), &*formatter);
        }
        Ok(())
    }
}

fn print_snapshot(snapshot: &DeviceSnapshot, formatter: &dyn OutputFormatter) {
    formatter.success(&format!(
        "{} {} ({})",
        snapshot.manufacturer, snapshot.model, snapshot.brand
    ));
    formatter.field("Android ID", &snapshot.android_id);
    formatter.field(
        "Platform",
        &format!("{} (API {})", snapshot.platform_version, snapshot.api_version),
    );
    formatter.field("Carrier", &or_null(snapshot.carrier_name.as_deref()));
    formatter.field(
        "Display",
        &format!(
            "{} @ {} dpi",
            snapshot.real_display_size, snapshot.display_density
        ),
    );
    formatter.field("Locale", &snapshot.locale);
    formatter.field("Time zone", &snapshot.time_zone);
    formatter.info("");
    formatter.info(&format!("Networks ({})", snapshot.networks.len()));
    for (index, record) in snapshot.networks.iter().enumerate() {
        print_record(index, record, formatter);
    }
}
