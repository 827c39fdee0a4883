//! ListBoards command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List all boards by ID
#[operation(verb = "list", noun = "boards", description = "List all boards")]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListBoards {}

impl ListBoards {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for ListBoards {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let result: Result<Value> = async {
            let workspace = ctx.read().await;
            let boards = workspace.boards.boards();
            Ok(serde_json::json!({
                "count": boards.len(),
                "boards": boards,
            }))
        }
        .await;

        ExecutionResult::unlogged(result)
    }
}
