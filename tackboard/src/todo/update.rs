//! UpdateTodo command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::TodoId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Update a to-do item
#[operation(
    verb = "update",
    noun = "todo",
    description = "Update a to-do item's title or done flag"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTodo {
    /// The item ID
    pub id: TodoId,
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "name")]
    pub title: Option<String>,
    /// New done flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl UpdateTodo {
    pub fn new(id: impl Into<TodoId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            done: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for UpdateTodo {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let todo = workspace.todos.todo_mut(self.id)?;
            if let Some(title) = &self.title {
                todo.title = title.clone();
            }
            if let Some(done) = self.done {
                todo.done = done;
            }
            Ok(serde_json::to_value(workspace.todos.todo(self.id)?)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
