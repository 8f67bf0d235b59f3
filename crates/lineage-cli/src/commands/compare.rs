// crates/lineage-cli/src/commands/compare.rs
//
// `lineage compare <a> <b>` — do two blocks share the same relay path?
// Exit status 0 on a match, 1 otherwise.

use std::process::ExitCode;

use clap::Args;
use serde::Serialize;

use lineage_core::{provenance, ConfigBlock};

use super::exit_status;
use crate::block_file;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct CompareCmd {
    /// First block file.
    pub first: String,
    /// Second block file.
    pub second: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CompareReport {
    pub first_hops: usize,
    pub second_hops: usize,
    pub matched: bool,
}

/// Compare the chains of two blocks.
pub fn compare_blocks(first: &ConfigBlock, second: &ConfigBlock) -> CompareReport {
    let report = CompareReport {
        first_hops: first.provenance().len(),
        second_hops: second.provenance().len(),
        matched: provenance::matches(first.provenance(), second.provenance()),
    };
    tracing::debug!(?report, "Compared provenance chains");
    report
}

/// Run the compare command.
pub fn run(cmd: &CompareCmd, format: OutputFormat) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let first = block_file::load(&cmd.first)?;
    let second = block_file::load(&cmd.second)?;

    let report = compare_blocks(&first, &second);

    match format {
        OutputFormat::Json => println!("{}", output::format_json(&report)),
        OutputFormat::Table => {
            let verdict = if report.matched { "match" } else { "do not match" };
            println!(
                "Chains {} ({} vs {} hops)",
                verdict, report.first_hops, report.second_hops
            );
        }
    }

    Ok(exit_status(report.matched))
}
