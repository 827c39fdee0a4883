//! CompleteTodo command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::TodoId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Mark a to-do item done
#[operation(verb = "complete", noun = "todo", description = "Mark a to-do item done")]
#[derive(Debug, Deserialize, Serialize)]
pub struct CompleteTodo {
    /// The item ID
    pub id: TodoId,
}

impl CompleteTodo {
    pub fn new(id: impl Into<TodoId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for CompleteTodo {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            workspace.todos.todo_mut(self.id)?.done = true;
            tracing::info!(id = ?self.id, "todo completed");
            Ok(serde_json::to_value(workspace.todos.todo(self.id)?)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
