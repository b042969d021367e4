use thiserror::Error;

use crate::models::holding::FieldError;

/// Unified error type for the entire stock-portfolio-core library.
///
/// Only the entry-validation boundary, settings and JSON import/export
/// return `Result<T, CoreError>`. Aggregation and presentation are total.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Entry validation ────────────────────────────────────────────
    #[error("Invalid holding: {}", join_field_errors(.0))]
    InvalidHolding(Vec<FieldError>),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Duplicate holding id: {0}")]
    DuplicateHolding(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Per-field errors for an invalid holding, empty for every other variant.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CoreError::InvalidHolding(errors) => errors,
            _ => &[],
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
