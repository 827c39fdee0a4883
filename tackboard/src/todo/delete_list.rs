//! DeleteTodoList command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::TodoListId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Delete a to-do list and its items
#[operation(
    verb = "delete",
    noun = "todolist",
    description = "Delete a to-do list and all of its items"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTodoList {
    /// The to-do list ID
    pub id: TodoListId,
}

impl DeleteTodoList {
    pub fn new(id: impl Into<TodoListId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for DeleteTodoList {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let todos = workspace.todos.delete_list(self.id)?;
            tracing::info!(id = ?self.id, todos, "todo list deleted");
            Ok(serde_json::json!({
                "deleted": true,
                "id": self.id,
                "todos": todos,
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::{AddTodo, AddTodoList, ListTodos};

    #[tokio::test]
    async fn test_delete_todolist_cascades() {
        let ctx = TackboardContext::new();
        AddTodoList::new("Chores").execute(&ctx).await.into_result().unwrap();
        AddTodo::new(1u64, "dishes").execute(&ctx).await.into_result().unwrap();
        AddTodo::new(1u64, "laundry").execute(&ctx).await.into_result().unwrap();

        let result = DeleteTodoList::new(1u64).execute(&ctx).await.into_result().unwrap();
        assert_eq!(result["todos"], 2);

        let err = ListTodos::new(1u64).execute(&ctx).await.into_result().unwrap_err();
        assert_eq!(err.to_string(), "todolist not found: 1");
    }
}
