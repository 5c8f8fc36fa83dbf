//! droidinfo CLI - Command-line interface for droidinfo
//!
//! Provides commands for:
//! - Printing the device snapshot of a recorded profile
//! - Listing the resolved network records
//! - Reading the status bar height
//! - Viewing and validating configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{
    completions::CompletionsCommand, config::ConfigCommand, info::InfoCommand,
    networks::NetworksCommand, system_bars::SystemBarsCommand, CliContext,
};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "droidinfo", version, about = "Inspect Android device snapshots")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Device profile to read (overrides `device.profile`)
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full device snapshot
    Info(InfoCommand),
    /// List the resolved network records
    Networks(NetworksCommand),
    /// Print the status bar height
    SystemBars(SystemBarsCommand),
    /// View and validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Generate shell completions
    Completions(CompletionsCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let ctx = CliContext::new(format, cli.config, cli.profile);

    match cli.command {
        Commands::Info(cmd) => cmd.execute(&ctx),
        Commands::Networks(cmd) => cmd.execute(&ctx),
        Commands::SystemBars(cmd) => cmd.execute(&ctx),
        Commands::Config(cmd) => cmd.execute(&ctx),
        Commands::Completions(cmd) => cmd.execute(&ctx),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["droidinfo", "networks", "--json", "--profile", "p.yaml"]);
        assert!(cli.json);
        assert_eq!(cli.profile, Some(PathBuf::from("p.yaml")));
        assert!(matches!(cli.command, Commands::Networks(_)));
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["droidinfo", "config", "validate"]);
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Validate)));
        let cli = Cli::parse_from(["droidinfo", "system-bars", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
