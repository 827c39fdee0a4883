//! MoveCard command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::store::slot;
use crate::types::{CardId, ListId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Move a card to a position in a list
#[operation(
    verb = "move",
    noun = "card",
    description = "Move a card to a position in the same or another list"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveCard {
    /// The card to move
    pub id: CardId,
    /// Destination list
    pub list_id: ListId,
    /// Zero-based slot; omitted or past the end appends, negative goes first
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "pos", alias = "index")]
    pub position: Option<i64>,
}

impl MoveCard {
    /// Move to the end of `list_id`
    pub fn new(id: impl Into<CardId>, list_id: impl Into<ListId>) -> Self {
        Self {
            id: id.into(),
            list_id: list_id.into(),
            position: None,
        }
    }

    pub fn to_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for MoveCard {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let position = slot(self.position);
            let card = workspace.boards.move_card(self.id, self.list_id, position)?;
            tracing::info!(id = ?card.id, list = ?card.container, position = card.position, "card moved");
            Ok(serde_json::to_value(card)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
