//! DeleteSession command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::SessionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Delete a practice session. Its week stays, even if left empty.
#[operation(verb = "delete", noun = "session", description = "Delete a practice session")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteSession {
    /// The session ID
    pub id: SessionId,
}

impl DeleteSession {
    pub fn new(id: impl Into<SessionId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for DeleteSession {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let session = workspace.practice.delete_session(self.id)?;
            tracing::info!(id = ?self.id, week = ?session.container, "session deleted");
            Ok(serde_json::json!({
                "deleted": true,
                "id": self.id,
                "week_id": session.container,
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
