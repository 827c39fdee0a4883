//! UpdateList command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::ListId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Rename a list
#[operation(verb = "update", noun = "list", description = "Rename a list")]
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateList {
    /// The list ID
    pub id: ListId,
    /// New title
    #[serde(alias = "name")]
    pub title: String,
}

impl UpdateList {
    pub fn new(id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for UpdateList {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            workspace.boards.list_mut(self.id)?.title = self.title.clone();
            Ok(serde_json::to_value(workspace.boards.list(self.id)?)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
