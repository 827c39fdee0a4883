//! ListLists command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List the lists on a board in order
#[operation(verb = "list", noun = "lists", description = "List a board's lists in order")]
#[derive(Debug, Deserialize, Serialize)]
pub struct ListLists {
    /// The board ID
    pub board_id: BoardId,
}

impl ListLists {
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for ListLists {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let result: Result<Value> = async {
            let workspace = ctx.read().await;
            let lists = workspace.boards.lists(self.board_id)?;
            Ok(serde_json::json!({
                "board_id": self.board_id,
                "count": lists.len(),
                "lists": lists,
            }))
        }
        .await;

        ExecutionResult::unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;
    use crate::list::AddList;

    #[tokio::test]
    async fn test_list_lists_empty_board() {
        let ctx = TackboardContext::new();
        AddBoard::new("B").execute(&ctx).await.into_result().unwrap();

        let result = ListLists::new(1u64).execute(&ctx).await.into_result().unwrap();
        assert_eq!(result["count"], 0);
        assert_eq!(result["lists"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_lists_in_order() {
        let ctx = TackboardContext::new();
        AddBoard::new("B").execute(&ctx).await.into_result().unwrap();
        AddList::new(1u64, "x").execute(&ctx).await.into_result().unwrap();
        AddList::new(1u64, "y").execute(&ctx).await.into_result().unwrap();

        let result = ListLists::new(1u64).execute(&ctx).await.into_result().unwrap();
        assert_eq!(result["lists"][0]["title"], "x");
        assert_eq!(result["lists"][1]["position"], 1);
    }
}
