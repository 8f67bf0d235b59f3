// crates/lineage-core/src/error.rs

use thiserror::Error;

/// Error types for provenance chain handling.
#[derive(Debug, Error)]
pub enum LineageError {
    /// A port value (`req` or `pub`) could not be interpreted as an integer.
    #[error("Coercion error: {field} value {value} is not an integer")]
    Coercion {
        /// Name of the record field being built.
        field: &'static str,
        /// Rendering of the value that was rejected.
        value: String,
    },

    /// The next stratum would not fit in a `u64`.
    #[error("Stratum overflow: chain already holds stratum {0}")]
    StratumOverflow(u64),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LineageError {
    pub(crate) fn coercion(field: &'static str, value: impl ToString) -> Self {
        LineageError::Coercion {
            field,
            value: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for LineageError {
    fn from(e: serde_json::Error) -> Self {
        LineageError::Serialization(e.to_string())
    }
}
