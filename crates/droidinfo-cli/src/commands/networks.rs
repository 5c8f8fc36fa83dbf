//! Networks command - List the resolved network records

use anyhow::{Context, Result};
use clap::Args;
use droidinfo_core::domain::ConnectivityRecord;
use droidinfo_core::usecases::{NetworkReportUseCase, ResolutionStrategy};
use tracing::info;

use super::CliContext;
use crate::output::{get_formatter, or_null, OutputFormat, OutputFormatter};

#[derive(Debug, Args)]
pub struct NetworksCommand {}

impl NetworksCommand {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);
        let config = ctx.load_config()?;
        let platform = ctx.open_platform(&config)?;

        let strategy = ResolutionStrategy::select(platform.api_level, &config.network);
        info!(api_level = platform.api_level, ?strategy, "Resolving networks");
        let records = NetworkReportUseCase::new(platform, &config.network).report();

        if ctx.format == OutputFormat::Json {
            let json =
                serde_json::to_value(&records).context("Failed to encode network records")?;
            formatter.print_json(&json);
            return Ok(());
        }

        let strategy = match strategy {
            ResolutionStrategy::Legacy => "legacy".to_string(),
            ResolutionStrategy::Modern(policy) => format!("modern, telephony {policy}"),
        };
        formatter.success(&format!("{} network(s) ({strategy})", records.len()));
        for (index, record) in records.iter().enumerate() {
            print_record(index, record, &*formatter);
        }
        Ok(())
    }
}

/// Prints one record as a short indented block
pub(crate) fn print_record(
    index: usize,
    record: &ConnectivityRecord,
    formatter: &dyn OutputFormatter,
) {
    let kind = match (&record.type_name, record.type_code) {
        (Some(name), Some(code)) => format!("{name} ({code})"),
        _ => "unknown type".to_string(),
    };
    formatter.info(&format!("[{index}] {kind}"));

    if let Some(legacy) = &record.legacy {
        formatter.field(
            "  State",
            &format!("{} / {}", legacy.state, legacy.detailed_state),
        );
        formatter.field(
            "  Flags",
            &format!(
                "connected={} available={} failover={} roaming={}",
                legacy.is_connected, legacy.is_available, legacy.is_failover, legacy.is_roaming
            ),
        );
        if !legacy.subtype_name.is_empty() {
            formatter.field(
                "  Subtype",
                &format!("{} ({})", legacy.subtype_name, legacy.subtype),
            );
        }
        formatter.field("  Extra info", &or_null(legacy.extra_info.as_deref()));
    }

    if let Some(cell) = &record.cell {
        formatter.field(
            "  Cell",
            &format!(
                "{}, signal {}",
                cell.cell_state,
                or_null(cell.cell_signal_strength)
            ),
        );
    }

    match &record.capabilities {
        Some(caps) => {
            formatter.field("  Transports", &format!("{:?}", caps.transport_types));
            formatter.field("  Capabilities", &caps.capability_names.join(", "));
            formatter.field(
                "  Bandwidth",
                &format!(
                    "up {} kbps, down {} kbps",
                    caps.link_upstream_kbps, caps.link_downstream_kbps
                ),
            );
            formatter.field("  SSID", &caps.ssid.to_string());
        }
        None => formatter.field("  Capabilities", "null"),
    }
}
