// crates/lineage-cli/src/commands/show.rs
//
// `lineage show` — print a block's provenance chain.

use clap::Args;

use lineage_core::ConfigBlock;

use crate::block_file;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct ShowCmd {
    /// JSON file holding the configuration block.
    #[arg(long)]
    pub block: String,
}

/// Render the block's chain. An empty chain prints a notice in table mode
/// and `[]` in JSON mode.
pub fn render_chain(block: &ConfigBlock, format: OutputFormat) -> String {
    if block.provenance().is_empty() && format == OutputFormat::Table {
        return "No provenance recorded.".to_string();
    }
    output::format_records(block.provenance(), format)
}

/// Run the show command.
pub fn run(cmd: &ShowCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let block = block_file::load(&cmd.block)?;
    println!("{}", render_chain(&block, format));
    Ok(())
}
