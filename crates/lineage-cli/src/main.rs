// crates/lineage-cli/src/main.rs
//
// CLI entrypoint for inspecting and extending provenance chains.
//
// Loads the local daemon identity from config, initializes tracing, and
// dispatches to the stamp, contains, compare, and show subcommands.

mod block_file;
mod commands;
mod config;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::compare::CompareCmd;
use commands::contains::ContainsCmd;
use commands::show::ShowCmd;
use commands::stamp::StampCmd;
use config::CliConfig;
use output::OutputFormat;

/// Lineage CLI — provenance chains for relayed configuration blocks.
#[derive(Parser, Debug)]
#[command(
    name = "lineage",
    version = "0.1.0",
    about = "Stamp, inspect, and compare provenance chains of configuration blocks"
)]
struct Cli {
    /// Path to the TOML configuration file holding the local daemon identity.
    #[arg(long, global = true, default_value = "~/.lineage/config.toml")]
    config: String,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Append this daemon to a block's provenance chain.
    Stamp(StampCmd),

    /// Check whether a daemon already appears in a block's chain.
    Contains(ContainsCmd),

    /// Check whether two blocks were relayed along the same path.
    Compare(CompareCmd),

    /// Print a block's provenance chain.
    Show(ShowCmd),
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The log level can come from the config file, so read it before
    // installing the subscriber and report the outcome afterwards. Only a
    // missing file falls back to defaults; a broken one aborts the command.
    let loaded = CliConfig::load_optional(&cli.config);
    let log_level = match &loaded {
        Ok(Some(cfg)) => cfg.log_level.clone(),
        _ => CliConfig::default().log_level,
    };

    // Logs go to stderr so JSON output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok(Some(cfg)) => {
            tracing::debug!("Loaded configuration from {}", cli.config);
            cfg
        }
        Ok(None) => {
            tracing::warn!("No config file at {}. Using defaults.", cli.config);
            CliConfig::default()
        }
        Err(e) => {
            tracing::error!("Could not load config from {}: {}", cli.config, e);
            return Err(e);
        }
    };

    let code = match &cli.command {
        Commands::Stamp(cmd) => commands::stamp::run(cmd, &config, cli.format)?,
        Commands::Contains(cmd) => commands::contains::run(cmd, &config, cli.format)?,
        Commands::Compare(cmd) => commands::compare::run(cmd, cli.format)?,
        Commands::Show(cmd) => {
            commands::show::run(cmd, cli.format)?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
