// crates/lineage-core/src/provenance.rs
//
// Provenance chains: who relayed a configuration block, and in what order.
//
// A daemon forwarding a block on behalf of an upstream requester appends a
// record naming itself. Consumers use the chain to spot requests that have
// already passed through a daemon (`contains`) and to decide whether two
// chains describe the same relay path (`matches`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block::ConfigBlock;
use crate::coerce::CoerceInt;
use crate::error::LineageError;

/// One daemon's participation in relaying a block.
///
/// Identity for membership checks is (`hostname`, `req`). Full equality
/// (`==`) compares every field, so a positionless record never equals one
/// that carries a stratum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    /// Depth in the chain, 0 = origin. `None` for a positionless record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stratum: Option<u64>,
    /// Hostname of the relaying daemon.
    pub hostname: String,
    /// Request-channel port.
    pub req: i64,
    /// Publish-channel port, if the daemon offers one.
    #[serde(rename = "pub", default, skip_serializing_if = "Option::is_none")]
    pub pub_port: Option<i64>,
}

impl ProvenanceRecord {
    /// Build a record from already-typed fields.
    pub fn new(
        stratum: Option<u64>,
        hostname: impl Into<String>,
        req: i64,
        pub_port: Option<i64>,
    ) -> Self {
        Self {
            stratum,
            hostname: hostname.into(),
            req,
            pub_port,
        }
    }

    /// True when the record does not assert a chain position.
    pub fn is_positionless(&self) -> bool {
        self.stratum.is_none()
    }

    /// Same daemon, ignoring `stratum` and `pub`.
    pub fn same_identity(&self, other: &ProvenanceRecord) -> bool {
        self.hostname == other.hostname && self.req == other.req
    }
}

impl fmt::Display for ProvenanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(stratum) = self.stratum {
            write!(f, "[{}] ", stratum)?;
        }
        write!(f, "{}:{}", self.hostname, self.req)?;
        if let Some(pub_port) = self.pub_port {
            write!(f, " (pub {})", pub_port)?;
        }
        Ok(())
    }
}

/// Build a provenance record, coercing the port fields to integers.
///
/// Pass `None` as `stratum` for a positionless record, used when only the
/// daemon's identity matters.
pub fn create(
    stratum: Option<u64>,
    hostname: impl ToString,
    req: impl CoerceInt,
    pub_port: Option<&dyn CoerceInt>,
) -> Result<ProvenanceRecord, LineageError> {
    let req = req.coerce_int("req")?;
    let pub_port = pub_port.map(|p| p.coerce_int("pub")).transpose()?;

    Ok(ProvenanceRecord {
        stratum,
        hostname: hostname.to_string(),
        req,
        pub_port,
    })
}

/// Append a record for this daemon to the block's chain.
///
/// The new stratum is one past the highest stratum already present, or 0
/// for an empty chain. Records without a stratum are skipped when finding
/// the highest. The block is modified in place; the new record is also
/// returned. On error the block is left untouched.
pub fn add(
    block: &mut ConfigBlock,
    hostname: impl ToString,
    req: impl CoerceInt,
    pub_port: Option<&dyn CoerceInt>,
) -> Result<ProvenanceRecord, LineageError> {
    let stratum = next_stratum(block.provenance())?;
    let record = create(Some(stratum), hostname, req, pub_port)?;

    block.provenance_mut().push(record.clone());
    Ok(record)
}

/// Does the block's chain hold a record for the same daemon as `record`?
///
/// Only `hostname` and `req` are compared; `stratum` and `pub` on either
/// side are ignored. A block without a chain contains nothing.
pub fn contains(block: &ConfigBlock, record: &ProvenanceRecord) -> bool {
    block
        .provenance()
        .iter()
        .any(|known| known.same_identity(record))
}

/// Do two chains describe the same relay path?
///
/// The chains are compared record by record from stratum 0 up to the
/// length of the shorter one, so a chain matches any extension of itself.
/// A single differing record fails the whole comparison. At least one
/// record has to agree: empty chains match nothing, not even each other.
pub fn matches(chain_a: &[ProvenanceRecord], chain_b: &[ProvenanceRecord]) -> bool {
    let mut matched = false;

    for (a, b) in chain_a.iter().zip(chain_b) {
        if a != b {
            return false;
        }
        matched = true;
    }

    matched
}

fn next_stratum(chain: &[ProvenanceRecord]) -> Result<u64, LineageError> {
    match chain.iter().filter_map(|r| r.stratum).max() {
        None => Ok(0),
        Some(highest) => highest
            .checked_add(1)
            .ok_or(LineageError::StratumOverflow(highest)),
    }
}
