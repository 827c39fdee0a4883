//! DeleteCard command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::CardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Delete a card
#[operation(verb = "delete", noun = "card", description = "Delete a card")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteCard {
    /// The card ID
    pub id: CardId,
}

impl DeleteCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for DeleteCard {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let card = workspace.boards.delete_card(self.id)?;
            tracing::info!(id = ?self.id, list = ?card.container, "card deleted");
            Ok(serde_json::json!({
                "deleted": true,
                "id": self.id,
                "list_id": card.container,
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;
    use crate::card::{AddCard, ListCards};
    use crate::list::AddList;

    #[tokio::test]
    async fn test_delete_middle_card() {
        let ctx = TackboardContext::new();
        AddBoard::new("B").execute(&ctx).await.into_result().unwrap();
        AddList::new(1u64, "L").execute(&ctx).await.into_result().unwrap();
        for title in ["a", "b", "c"] {
            AddCard::new(1u64, title).execute(&ctx).await.into_result().unwrap();
        }

        let result = DeleteCard::new(2u64).execute(&ctx).await.into_result().unwrap();
        assert_eq!(result["deleted"], true);

        let list = ListCards::new(1u64).execute(&ctx).await.into_result().unwrap();
        assert_eq!(list["count"], 2);
        assert_eq!(list["cards"][0]["title"], "a");
        assert_eq!(list["cards"][1]["title"], "c");
        assert_eq!(list["cards"][1]["position"], 1);

        let err = DeleteCard::new(2u64).execute(&ctx).await.into_result().unwrap_err();
        assert!(err.is_not_found());
    }
}
