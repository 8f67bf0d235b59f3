// crates/lineage-cli/src/output.rs
//
// Output formatting utilities for the lineage CLI.
// Supports table and JSON output modes.

use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled};

use lineage_core::ProvenanceRecord;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// One table row per provenance record.
#[derive(Debug, Tabled)]
pub struct RecordRow {
    #[tabled(rename = "Stratum")]
    pub stratum: String,
    #[tabled(rename = "Hostname")]
    pub hostname: String,
    #[tabled(rename = "Req")]
    pub req: i64,
    #[tabled(rename = "Pub")]
    pub pub_port: String,
}

impl From<&ProvenanceRecord> for RecordRow {
    fn from(record: &ProvenanceRecord) -> Self {
        Self {
            stratum: opt_to_string(record.stratum),
            hostname: record.hostname.clone(),
            req: record.req,
            pub_port: opt_to_string(record.pub_port),
        }
    }
}

fn opt_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Render a chain in the requested format.
pub fn format_records(records: &[ProvenanceRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
            format_table(&rows)
        }
        OutputFormat::Json => format_json(&records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_uses_block_schema() {
        let records = vec![ProvenanceRecord::new(Some(0), "h1", 100, Some(101))];
        let out = format_records(&records, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!([{"stratum": 0, "hostname": "h1", "req": 100, "pub": 101}])
        );
    }

    #[test]
    fn test_table_output_marks_absent_fields() {
        let records = vec![ProvenanceRecord::new(None, "h1", 100, None)];
        let out = format_records(&records, OutputFormat::Table);

        assert!(out.contains("Hostname"));
        assert!(out.contains("h1"));
        assert!(out.contains('-'));
    }
}
