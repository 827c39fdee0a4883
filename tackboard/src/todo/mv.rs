//! MoveTodo command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::store::slot;
use crate::types::{TodoId, TodoListId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Move a to-do item to a position in a list
#[operation(
    verb = "move",
    noun = "todo",
    description = "Move a to-do item to a position in the same or another list"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTodo {
    /// The item to move
    pub id: TodoId,
    /// Destination list
    #[serde(alias = "todo_list_id")]
    pub todolist_id: TodoListId,
    /// Zero-based slot; omitted or past the end appends, negative goes first
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "pos", alias = "index")]
    pub position: Option<i64>,
}

impl MoveTodo {
    pub fn new(id: impl Into<TodoId>, todolist_id: impl Into<TodoListId>) -> Self {
        Self {
            id: id.into(),
            todolist_id: todolist_id.into(),
            position: None,
        }
    }

    pub fn to_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for MoveTodo {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let position = slot(self.position);
            let todo = workspace
                .todos
                .move_todo(self.id, self.todolist_id, position)?;
            tracing::info!(id = ?todo.id, list = ?todo.container, position = todo.position, "todo moved");
            Ok(serde_json::to_value(todo)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
