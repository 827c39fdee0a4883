//! AddTodoList command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::TodoList;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Create a to-do list
#[operation(verb = "add", noun = "todolist", description = "Create a new to-do list")]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTodoList {
    /// List title
    #[serde(alias = "name")]
    pub title: String,
}

impl AddTodoList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for AddTodoList {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let id = workspace.todos.add_list(TodoList::new(self.title.clone()));
            tracing::info!(?id, "todo list added");
            Ok(serde_json::to_value(workspace.todos.list(id)?)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
