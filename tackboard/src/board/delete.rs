//! DeleteBoard command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Delete a board with all of its lists and cards
#[operation(
    verb = "delete",
    noun = "board",
    description = "Delete a board together with its lists and cards"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteBoard {
    /// The board ID
    pub id: BoardId,
}

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for DeleteBoard {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let removal = workspace.boards.delete_board(self.id)?;
            tracing::info!(id = ?self.id, lists = removal.lists, cards = removal.cards, "board deleted");
            Ok(serde_json::json!({
                "deleted": true,
                "id": self.id,
                "lists": removal.lists,
                "cards": removal.cards,
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
