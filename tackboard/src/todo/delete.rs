//! DeleteTodo command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::TodoId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Delete a to-do item
#[operation(verb = "delete", noun = "todo", description = "Delete a to-do item")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTodo {
    /// The item ID
    pub id: TodoId,
}

impl DeleteTodo {
    pub fn new(id: impl Into<TodoId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for DeleteTodo {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let todo = workspace.todos.delete_todo(self.id)?;
            tracing::info!(id = ?self.id, "todo deleted");
            Ok(serde_json::json!({
                "deleted": true,
                "id": self.id,
                "todolist_id": todo.container,
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
