// crates/lineage-core/tests/relay_chain.rs
//
// Integration tests for provenance chains as blocks move between daemons.
//
// Each "hop" serializes the block to JSON and parses it back, the way a
// block crosses the wire between daemons, so these tests also cover the
// block schema seen by other implementations.

use serde_json::json;

use lineage_core::{matches, ConfigBlock, ProvenanceRecord, RelayIdentity};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Send a block over the "wire": JSON out, JSON back in.
fn transmit(block: &ConfigBlock) -> ConfigBlock {
    let text = block.to_json_pretty().unwrap();
    ConfigBlock::from_json(&text).unwrap()
}

/// Relay a block through each daemon in turn, returning what the last one sees.
fn relay_through(origin: ConfigBlock, daemons: &[RelayIdentity]) -> ConfigBlock {
    let mut block = origin;
    for daemon in daemons {
        assert!(
            !daemon.has_relayed(&block),
            "{} should not have seen this block yet",
            daemon.hostname
        );
        daemon.stamp(&mut block).unwrap();
        block = transmit(&block);
    }
    block
}

fn daemons() -> Vec<RelayIdentity> {
    vec![
        RelayIdentity::new("origin.example", 10111, Some(10139)),
        RelayIdentity::new("relay-a.example", 10112, None),
        RelayIdentity::new("relay-b.example", 10113, Some(10140)),
    ]
}

fn origin_block() -> ConfigBlock {
    ConfigBlock::from_value(json!({
        "name": "kpfguide",
        "keys": {"DISP1": {"type": "numeric"}}
    }))
    .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_three_hop_relay_builds_ordered_chain() {
    let daemons = daemons();
    let block = relay_through(origin_block(), &daemons);

    let chain = block.provenance();
    assert_eq!(chain.len(), 3);
    for (i, (record, daemon)) in chain.iter().zip(&daemons).enumerate() {
        assert_eq!(record.stratum, Some(i as u64));
        assert_eq!(record.hostname, daemon.hostname);
        assert_eq!(record.req, daemon.req);
        assert_eq!(record.pub_port, daemon.pub_port);
    }

    // Payload keys are untouched by relaying.
    assert_eq!(block.extra["name"], json!("kpfguide"));
    assert_eq!(block.extra["keys"]["DISP1"]["type"], json!("numeric"));
}

#[test]
fn test_loop_is_detected_when_block_returns() {
    let daemons = daemons();
    let block = relay_through(origin_block(), &daemons);

    // The block comes back around to the origin daemon.
    assert!(daemons[0].has_relayed(&block));
    assert!(!RelayIdentity::new("relay-c.example", 10114, None).has_relayed(&block));
}

#[test]
fn test_upstream_and_downstream_views_match() {
    let daemons = daemons();
    let upstream = relay_through(origin_block(), &daemons[..2]);
    let downstream = relay_through(origin_block(), &daemons);

    assert!(matches(upstream.provenance(), downstream.provenance()));
    assert!(matches(downstream.provenance(), upstream.provenance()));
}

#[test]
fn test_divergent_paths_do_not_match() {
    let daemons = daemons();
    let via_a = relay_through(origin_block(), &daemons);

    let other_path = vec![
        daemons[0].clone(),
        RelayIdentity::new("relay-z.example", 10120, None),
        daemons[2].clone(),
    ];
    let via_z = relay_through(origin_block(), &other_path);

    assert!(!matches(via_a.provenance(), via_z.provenance()));
}

#[test]
fn test_unrelayed_blocks_never_match() {
    let a = origin_block();
    let b = origin_block();
    assert!(!matches(a.provenance(), b.provenance()));
}

#[test]
fn test_wire_format() {
    let block = relay_through(ConfigBlock::new(), &daemons()[..2]);

    assert_eq!(
        block.to_value().unwrap(),
        json!({
            "provenance": [
                {"stratum": 0, "hostname": "origin.example", "req": 10111, "pub": 10139},
                {"stratum": 1, "hostname": "relay-a.example", "req": 10112}
            ]
        })
    );
}

#[test]
fn test_foreign_chain_is_extended() {
    // A chain produced elsewhere, with string-typed ports already coerced
    // upstream and a positionless entry appended by hand.
    let mut block = ConfigBlock::from_value(json!({
        "provenance": [
            {"stratum": 0, "hostname": "h1", "req": 100},
            {"hostname": "h-manual", "req": 150}
        ]
    }))
    .unwrap();

    let me = RelayIdentity::new("h2", 200, None);
    let stamped = me.stamp(&mut block).unwrap();

    assert_eq!(stamped, ProvenanceRecord::new(Some(1), "h2", 200, None));
    assert_eq!(block.provenance().len(), 3);
}
