//! GetBoard command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Get a board with its lists and their cards
#[operation(
    verb = "get",
    noun = "board",
    description = "Get a board with its lists and cards in order"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct GetBoard {
    /// The board ID
    pub id: BoardId,
}

impl GetBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for GetBoard {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let result: Result<Value> = async {
            let workspace = ctx.read().await;
            Ok(serde_json::to_value(workspace.boards.view(self.id)?)?)
        }
        .await;

        ExecutionResult::unlogged(result)
    }
}
