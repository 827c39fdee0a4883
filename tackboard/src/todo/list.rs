//! ListTodos command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::TodoListId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List the items of a to-do list in order
#[operation(verb = "list", noun = "todos", description = "List a to-do list's items in order")]
#[derive(Debug, Deserialize, Serialize)]
pub struct ListTodos {
    /// The to-do list ID
    #[serde(alias = "todo_list_id")]
    pub todolist_id: TodoListId,
}

impl ListTodos {
    pub fn new(todolist_id: impl Into<TodoListId>) -> Self {
        Self {
            todolist_id: todolist_id.into(),
        }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for ListTodos {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let result: Result<Value> = async {
            let workspace = ctx.read().await;
            let todos = workspace.todos.todos(self.todolist_id)?;
            let done = todos.iter().filter(|t| t.record.done).count();
            Ok(serde_json::json!({
                "todolist_id": self.todolist_id,
                "count": todos.len(),
                "done": done,
                "todos": todos,
            }))
        }
        .await;

        ExecutionResult::unlogged(result)
    }
}
