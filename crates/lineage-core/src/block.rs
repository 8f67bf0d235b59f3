// crates/lineage-core/src/block.rs
//
// The configuration block carried between daemons.
//
// Only the `provenance` key has meaning here. Every other key is kept in
// `extra` with its value untouched. The `provenance` key itself is
// normalized on output: it is written first, and a `null` or absent chain
// is omitted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LineageError;
use crate::provenance::ProvenanceRecord;

/// A configuration block owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigBlock {
    /// Relay chain, ordered by ascending stratum. `None` until first touched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Vec<ProvenanceRecord>>,
    /// All remaining keys of the block.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigBlock {
    /// An empty block with no provenance field.
    pub fn new() -> Self {
        Self::default()
    }

    /// View of the chain. An absent field reads as an empty chain.
    pub fn provenance(&self) -> &[ProvenanceRecord] {
        self.provenance.as_deref().unwrap_or(&[])
    }

    /// Mutable chain, initializing the field to empty if it is absent.
    pub fn provenance_mut(&mut self) -> &mut Vec<ProvenanceRecord> {
        self.provenance.get_or_insert_with(Vec::new)
    }

    /// Parse a block from JSON text.
    pub fn from_json(text: &str) -> Result<Self, LineageError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Convert an already-parsed JSON value into a block.
    pub fn from_value(value: Value) -> Result<Self, LineageError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Render the block as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, LineageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_value(&self) -> Result<Value, LineageError> {
        Ok(serde_json::to_value(self)?)
    }
}
