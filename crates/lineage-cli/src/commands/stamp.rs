// crates/lineage-cli/src/commands/stamp.rs
//
// `lineage stamp` — append the local daemon to a block's provenance chain.

use std::process::ExitCode;

use clap::Args;

use lineage_core::{ConfigBlock, ProvenanceRecord, RelayIdentity};

use super::IdentityArgs;
use crate::block_file;
use crate::config::CliConfig;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct StampCmd {
    /// JSON file holding the configuration block.
    #[arg(long)]
    pub block: String,

    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Write the stamped block here instead of back to --block.
    #[arg(long)]
    pub output: Option<String>,

    /// Stamp even if this daemon already appears in the chain.
    #[arg(long)]
    pub allow_repeat: bool,
}

/// Append `identity` to the block's chain.
///
/// Refuses, leaving the block untouched, when the daemon is already in the
/// chain and `allow_repeat` is false.
pub fn stamp_block(
    block: &mut ConfigBlock,
    identity: &RelayIdentity,
    allow_repeat: bool,
) -> Result<ProvenanceRecord, Box<dyn std::error::Error>> {
    if identity.has_relayed(block) && !allow_repeat {
        tracing::warn!(
            hostname = %identity.hostname,
            req = identity.req,
            "Daemon already present in provenance chain"
        );
        return Err(format!(
            "{}:{} already relayed this block (use --allow-repeat to stamp anyway)",
            identity.hostname, identity.req
        )
        .into());
    }

    let record = identity.stamp(block)?;
    tracing::info!(record = %record, "Stamped configuration block");
    Ok(record)
}

/// Run the stamp command.
pub fn run(
    cmd: &StampCmd,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let identity = cmd.identity.resolve(config)?;
    let mut block = block_file::load(&cmd.block)?;

    let record = stamp_block(&mut block, &identity, cmd.allow_repeat)?;

    let target = cmd.output.as_deref().unwrap_or(&cmd.block);
    block_file::save(target, &block)?;

    println!("{}", output::format_records(std::slice::from_ref(&record), format));
    Ok(ExitCode::SUCCESS)
}
