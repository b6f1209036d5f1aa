use thiserror::Error;

use crate::models::metric::Metric;

/// Unified error type for the entire vehicle-analysis-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// None of these are fatal: the caller decides whether to show a message,
/// skip the offending row or refuse the operation.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input series ────────────────────────────────────────────────
    #[error("Malformed series: {0}")]
    Shape(String),

    #[error("Cannot average an empty {metric} series")]
    EmptySeries { metric: Metric },

    #[error("Average of the {metric} series is not a finite number")]
    NonFiniteAverage { metric: Metric },

    // ── Result table ────────────────────────────────────────────────
    #[error("Row {row} has no sort value for column '{column}'")]
    MissingKey { row: String, column: String },

    #[error("Row {row} has an invalid sort value for column '{column}': {value:?}")]
    InvalidSortKey {
        row: String,
        column: String,
        value: String,
    },

    // ── Configuration / payload ─────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
