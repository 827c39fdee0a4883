//! UpdateCard command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::CardId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Update card fields. Position and list are left alone.
#[operation(
    verb = "update",
    noun = "card",
    description = "Update a card's title, description or due date"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateCard {
    /// The card ID
    pub id: CardId,
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "name")]
    pub title: Option<String>,
    /// New description
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "desc",
        alias = "body",
        alias = "content"
    )]
    pub description: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
}

impl UpdateCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            due: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
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
impl Execute<TackboardContext, TackboardError> for UpdateCard {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let card = workspace.boards.card_mut(self.id)?;
            if let Some(title) = &self.title {
                card.title = title.clone();
            }
            if let Some(description) = &self.description {
                card.description = description.clone();
            }
            if let Some(due) = self.due {
                card.due = Some(due);
            }
            Ok(serde_json::to_value(workspace.boards.card(self.id)?)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
