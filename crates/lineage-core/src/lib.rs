// crates/lineage-core/src/lib.rs
//
// lineage-core: provenance chains for configuration blocks.
//
// Each daemon that relays a configuration block stamps it with a record
// naming itself and its depth in the relay chain. This crate creates,
// extends, searches, and compares those chains. It does no IO; moving
// blocks between daemons and storing them is left to the caller.

pub mod block;
pub mod coerce;
pub mod error;
pub mod identity;
pub mod provenance;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use lineage_core::ProvenanceRecord;`

pub use block::ConfigBlock;
pub use coerce::CoerceInt;
pub use error::LineageError;
pub use identity::RelayIdentity;
pub use provenance::{add, contains, create, matches, ProvenanceRecord};
