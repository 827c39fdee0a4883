//! Per-operation result envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one dispatched operation, as returned to external callers.
///
/// A `NotFound` becomes `ok: false` with `data: null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult {
    /// Unique ID of this execution (ULID)
    pub op_id: String,

    /// Canonical op string, when the input could be parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,

    /// Whether the operation succeeded
    pub ok: bool,

    /// The response payload (if successful)
    pub data: Value,

    /// Error message (if failed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// How long the operation took
    pub duration_ms: u64,
}

impl OperationResult {
    /// Create a successful result
    pub fn success(op: impl Into<String>, data: Value, duration_ms: u64) -> Self {
        Self {
            op_id: ulid::Ulid::new().to_string(),
            op: Some(op.into()),
            ok: true,
            data,
            error: None,
            duration_ms,
        }
    }

    /// Create a failed result
    pub fn failure(op: Option<String>, error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            op_id: ulid::Ulid::new().to_string(),
            op,
            ok: false,
            data: Value::Null,
            error: Some(error.into()),
            duration_ms,
        }
    }

    /// Get the ID from the data if present
    pub fn get_id(&self) -> Option<u64> {
        self.data.get("id").and_then(Value::as_u64)
    }
}
