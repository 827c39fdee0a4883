//! DeleteList command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::ListId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Delete a list and its cards
#[operation(
    verb = "delete",
    noun = "list",
    description = "Delete a list and its cards, closing the gap on its board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteList {
    /// The list ID
    pub id: ListId,
}

impl DeleteList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for DeleteList {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let (list, cards) = workspace.boards.delete_list(self.id)?;
            tracing::info!(id = ?self.id, cards, "list deleted");
            Ok(serde_json::json!({
                "deleted": true,
                "id": self.id,
                "board_id": list.container,
                "cards": cards,
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
