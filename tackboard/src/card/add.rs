//! AddCard command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::{Card, ListId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Append a card to a list
#[operation(
    verb = "add",
    noun = "card",
    description = "Append a new card to the end of a list"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddCard {
    /// List that receives the card
    pub list_id: ListId,
    /// Card title
    #[serde(alias = "name")]
    pub title: String,
    /// Card description
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "desc",
        alias = "body",
        alias = "content"
    )]
    pub description: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
}

impl AddCard {
    pub fn new(list_id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            title: title.into(),
            description: None,
            due: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for AddCard {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let card = Card {
                title: self.title.clone(),
                description: self.description.clone().unwrap_or_default(),
                due: self.due,
            };

            let mut workspace = ctx.write().await;
            let card = workspace.boards.add_card(self.list_id, card)?;
            tracing::info!(id = ?card.id, list = ?card.container, position = card.position, "card added");
            Ok(serde_json::to_value(card)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
