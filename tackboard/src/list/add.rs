//! AddList command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::{BoardId, List};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Append a list to a board
#[operation(
    verb = "add",
    noun = "list",
    description = "Append a new list to the end of a board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddList {
    /// Board that receives the list
    pub board_id: BoardId,
    /// List title
    #[serde(alias = "name")]
    pub title: String,
}

impl AddList {
    pub fn new(board_id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            title: title.into(),
        }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for AddList {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let list = workspace
                .boards
                .add_list(self.board_id, List::new(self.title.clone()))?;
            tracing::info!(id = ?list.id, board = ?list.container, position = list.position, "list added");
            Ok(serde_json::to_value(list)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;

    #[tokio::test]
    async fn test_add_list_appends() {
        let ctx = TackboardContext::new();
        AddBoard::new("B").execute(&ctx).await.into_result().unwrap();

        let first = AddList::new(1u64, "Todo").execute(&ctx).await.into_result().unwrap();
        let second = AddList::new(1u64, "Done").execute(&ctx).await.into_result().unwrap();

        assert_eq!(first["position"], 0);
        assert_eq!(second["position"], 1);
        assert_eq!(second["board_id"], 1);
        assert_eq!(second["id"], 2);
    }

    #[tokio::test]
    async fn test_add_list_to_missing_board() {
        let ctx = TackboardContext::new();
        let err = AddList::new(5u64, "Todo")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "board not found: 5");
    }
}
