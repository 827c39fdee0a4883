//! AddBoard command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::Board;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Create a new, empty board
#[operation(verb = "add", noun = "board", description = "Create a new board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddBoard {
    /// Board title
    #[serde(alias = "name")]
    pub title: String,
    /// Optional board description
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "desc",
        alias = "body",
        alias = "content"
    )]
    pub description: Option<String>,
}

impl AddBoard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for AddBoard {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let board = Board {
                title: self.title.clone(),
                description: self.description.clone(),
            };
            let id = workspace.boards.add_board(board);
            tracing::info!(?id, title = %self.title, "board added");
            Ok(serde_json::to_value(workspace.boards.board(id)?)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_board() {
        let ctx = TackboardContext::new();

        let result = AddBoard::new("Sprint 1")
            .with_description("Two weeks")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(result["id"], 1);
        assert_eq!(result["title"], "Sprint 1");
        assert_eq!(result["description"], "Two weeks");
    }

    #[tokio::test]
    async fn test_add_board_is_logged() {
        let ctx = TackboardContext::new();
        let result = AddBoard::new("Sprint").execute(&ctx).await;
        assert!(result.should_log());
    }
}
