//! ListCards command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::ListId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List the cards in a list in order
#[operation(verb = "list", noun = "cards", description = "List a list's cards in order")]
#[derive(Debug, Deserialize, Serialize)]
pub struct ListCards {
    /// The list ID
    pub list_id: ListId,
}

impl ListCards {
    pub fn new(list_id: impl Into<ListId>) -> Self {
        Self {
            list_id: list_id.into(),
        }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for ListCards {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let result: Result<Value> = async {
            let workspace = ctx.read().await;
            let cards = workspace.boards.cards(self.list_id)?;
            Ok(serde_json::json!({
                "list_id": self.list_id,
                "count": cards.len(),
                "cards": cards,
            }))
        }
        .await;

        ExecutionResult::unlogged(result)
    }
}
