//! MoveList command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::store::slot;
use crate::types::{BoardId, ListId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Move a list to a position on a board
#[operation(
    verb = "move",
    noun = "list",
    description = "Move a list to a position on the same or another board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveList {
    /// The list to move
    pub id: ListId,
    /// Destination board
    pub board_id: BoardId,
    /// Zero-based slot; omitted or past the end appends, negative goes first
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "pos", alias = "index")]
    pub position: Option<i64>,
}

impl MoveList {
    pub fn new(id: impl Into<ListId>, board_id: impl Into<BoardId>) -> Self {
        Self {
            id: id.into(),
            board_id: board_id.into(),
            position: None,
        }
    }

    pub fn to_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for MoveList {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let position = slot(self.position);
            let list = workspace.boards.move_list(self.id, self.board_id, position)?;
            tracing::info!(id = ?list.id, board = ?list.container, position = list.position, "list moved");
            Ok(serde_json::to_value(list)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
