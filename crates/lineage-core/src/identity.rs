// crates/lineage-core/src/identity.rs

use serde::{Deserialize, Serialize};

use crate::block::ConfigBlock;
use crate::coerce::CoerceInt;
use crate::error::LineageError;
use crate::provenance::{self, ProvenanceRecord};

/// Identity of a daemon that relays configuration blocks.
///
/// The hostname and ports give downstream clients enough to open a
/// connection back to this daemon with further requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayIdentity {
    /// Hostname clients should connect to.
    pub hostname: String,
    /// Request-channel port.
    pub req: i64,
    /// Publish-channel port, if this daemon publishes.
    #[serde(rename = "pub", default, skip_serializing_if = "Option::is_none")]
    pub pub_port: Option<i64>,
}

impl RelayIdentity {
    pub fn new(hostname: impl Into<String>, req: i64, pub_port: Option<i64>) -> Self {
        Self {
            hostname: hostname.into(),
            req,
            pub_port,
        }
    }

    /// Positionless record naming this daemon, for membership checks.
    pub fn record(&self) -> ProvenanceRecord {
        ProvenanceRecord::new(None, self.hostname.clone(), self.req, self.pub_port)
    }

    /// Stamp the block with this daemon as the next hop in its chain.
    pub fn stamp(&self, block: &mut ConfigBlock) -> Result<ProvenanceRecord, LineageError> {
        provenance::add(
            block,
            &self.hostname,
            self.req,
            self.pub_port.as_ref().map(|p| p as &dyn CoerceInt),
        )
    }

    /// Has this daemon already relayed the block?
    pub fn has_relayed(&self, block: &ConfigBlock) -> bool {
        provenance::contains(block, &self.record())
    }
}

impl From<&ProvenanceRecord> for RelayIdentity {
    fn from(record: &ProvenanceRecord) -> Self {
        Self::new(record.hostname.clone(), record.req, record.pub_port)
    }
}
