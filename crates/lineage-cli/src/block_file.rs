// crates/lineage-cli/src/block_file.rs
//
// Reading and writing configuration blocks as JSON files.

use std::fs;

use lineage_core::ConfigBlock;

use crate::config::expand_tilde;

/// Load a block from a JSON file.
pub fn load(path: &str) -> Result<ConfigBlock, Box<dyn std::error::Error>> {
    let path = expand_tilde(path);
    let contents = fs::read_to_string(&path)?;
    let block = ConfigBlock::from_json(&contents)?;
    tracing::debug!(
        path = %path,
        hops = block.provenance().len(),
        "Loaded configuration block"
    );
    Ok(block)
}

/// Write a block to a JSON file, replacing any existing contents.
///
/// The block is written to a sibling temp file first and renamed over the
/// target, so a failed write never leaves a truncated block behind.
pub fn save(path: &str, block: &ConfigBlock) -> Result<(), Box<dyn std::error::Error>> {
    let path = expand_tilde(path);
    let mut contents = block.to_json_pretty()?;
    contents.push('\n');

    let tmp_path = format!("{}.tmp.{}", path, std::process::id());
    if let Err(e) = fs::write(&tmp_path, contents) {
        fs::remove_file(&tmp_path).ok();
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp_path, &path) {
        fs::remove_file(&tmp_path).ok();
        return Err(e.into());
    }

    tracing::debug!(path = %path, "Saved configuration block");
    Ok(())
}

/// Unique per-process scratch path for tests that touch the filesystem.
#[cfg(test)]
pub(crate) fn temp_path(label: &str) -> String {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("lineage_test_{}_{}.json", label, std::process::id()));
    path.to_string_lossy().to_string()
}
