// crates/lineage-cli/src/commands/contains.rs
//
// `lineage contains` — check whether a daemon already relayed a block.
// Exit status 0 when the daemon is in the chain, 1 when it is not.

use std::process::ExitCode;

use clap::Args;
use serde::Serialize;

use lineage_core::{provenance, ConfigBlock, ProvenanceRecord};

use super::{exit_status, IdentityArgs};
use crate::block_file;
use crate::config::CliConfig;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct ContainsCmd {
    /// JSON file holding the configuration block.
    #[arg(long)]
    pub block: String,

    #[command(flatten)]
    pub identity: IdentityArgs,
}

#[derive(Debug, Serialize)]
pub struct ContainsReport {
    pub record: ProvenanceRecord,
    pub contains: bool,
}

/// Membership check of `record` against the block's chain.
pub fn check(block: &ConfigBlock, record: ProvenanceRecord) -> ContainsReport {
    let contains = provenance::contains(block, &record);
    tracing::debug!(record = %record, found = contains, "Checked provenance membership");
    ContainsReport { record, contains }
}

/// Run the contains command.
pub fn run(
    cmd: &ContainsCmd,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let record = cmd.identity.resolve(config)?.record();
    let block = block_file::load(&cmd.block)?;

    let report = check(&block, record);

    match format {
        OutputFormat::Json => println!("{}", output::format_json(&report)),
        OutputFormat::Table => {
            let verdict = if report.contains { "present in" } else { "absent from" };
            println!(
                "{}:{} is {} the chain",
                report.record.hostname, report.record.req, verdict
            );
        }
    }

    Ok(exit_status(report.contains))
}
