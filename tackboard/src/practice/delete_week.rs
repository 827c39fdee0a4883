//! DeleteWeek command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::WeekId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Delete a week and its sessions
#[operation(
    verb = "delete",
    noun = "week",
    description = "Delete a practice week and all of its sessions"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteWeek {
    /// The week ID
    pub id: WeekId,
}

impl DeleteWeek {
    pub fn new(id: impl Into<WeekId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for DeleteWeek {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let sessions = workspace.practice.delete_week(self.id)?;
            tracing::info!(id = ?self.id, sessions, "week deleted");
            Ok(serde_json::json!({
                "deleted": true,
                "id": self.id,
                "sessions": sessions,
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
