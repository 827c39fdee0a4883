//! GetCard command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::CardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Get a card by ID
#[operation(verb = "get", noun = "card", description = "Get a card by ID")]
#[derive(Debug, Deserialize, Serialize)]
pub struct GetCard {
    /// The card ID
    pub id: CardId,
}

impl GetCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for GetCard {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let result: Result<Value> = async {
            let workspace = ctx.read().await;
            Ok(serde_json::to_value(workspace.boards.card(self.id)?)?)
        }
        .await;

        ExecutionResult::unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;
    use crate::card::AddCard;
    use crate::list::AddList;

    #[tokio::test]
    async fn test_get_card() {
        let ctx = TackboardContext::new();
        AddBoard::new("B").execute(&ctx).await.into_result().unwrap();
        AddList::new(1u64, "L").execute(&ctx).await.into_result().unwrap();
        AddCard::new(1u64, "c").execute(&ctx).await.into_result().unwrap();

        let card = GetCard::new(1u64).execute(&ctx).await.into_result().unwrap();
        assert_eq!(card["title"], "c");

        let err = GetCard::new(2u64).execute(&ctx).await.into_result().unwrap_err();
        assert_eq!(err.to_string(), "card not found: 2");
    }
}
