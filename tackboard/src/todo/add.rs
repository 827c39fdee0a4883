//! AddTodo command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::{Todo, TodoListId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Append an item to a to-do list
#[operation(
    verb = "add",
    noun = "todo",
    description = "Append an item to the end of a to-do list"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTodo {
    /// List that receives the item
    #[serde(alias = "todo_list_id")]
    pub todolist_id: TodoListId,
    /// Item title
    #[serde(alias = "name")]
    pub title: String,
}

impl AddTodo {
    pub fn new(todolist_id: impl Into<TodoListId>, title: impl Into<String>) -> Self {
        Self {
            todolist_id: todolist_id.into(),
            title: title.into(),
        }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for AddTodo {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let todo = workspace
                .todos
                .add_todo(self.todolist_id, Todo::new(self.title.clone()))?;
            tracing::info!(id = ?todo.id, position = todo.position, "todo added");
            Ok(serde_json::to_value(todo)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
