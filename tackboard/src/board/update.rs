//! UpdateBoard command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Update board title or description
#[operation(
    verb = "update",
    noun = "board",
    description = "Update a board's title or description"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateBoard {
    /// The board ID
    pub id: BoardId,
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "name")]
    pub title: Option<String>,
    /// New description
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "desc",
        alias = "body",
        alias = "content"
    )]
    pub description: Option<String>,
}

impl UpdateBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for UpdateBoard {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let board = workspace.boards.board_mut(self.id)?;
            if let Some(title) = &self.title {
                board.title = title.clone();
            }
            if let Some(description) = &self.description {
                board.description = Some(description.clone());
            }
            Ok(serde_json::to_value(workspace.boards.board(self.id)?)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
