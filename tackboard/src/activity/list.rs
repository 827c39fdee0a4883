//! ListActivity command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Read recent activity, newest first
#[operation(
    verb = "list",
    noun = "activity",
    description = "List recorded mutations, newest first"
)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListActivity {
    /// Maximum number of entries to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl ListActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for ListActivity {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let result: Result<Value> = async {
            let entries = ctx.activity(self.limit).await;
            Ok(serde_json::json!({
                "count": entries.len(),
                "entries": entries,
            }))
        }
        .await;

        ExecutionResult::unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{AddBoard, ListBoards};
    use crate::processor::TackboardOperationProcessor;
    use tackboard_operations::OperationProcessor;

    #[tokio::test]
    async fn test_only_mutations_are_recorded() {
        let ctx = TackboardContext::new();
        let processor = TackboardOperationProcessor::with_actor("tester");

        processor.process(&AddBoard::new("a"), &ctx).await.unwrap();
        processor.process(&ListBoards::new(), &ctx).await.unwrap();
        processor.process(&AddBoard::new("b"), &ctx).await.unwrap();

        let result = processor
            .process(&ListActivity::new().with_limit(10), &ctx)
            .await
            .unwrap();
        assert_eq!(result["count"], 2);
        assert_eq!(result["entries"][0]["op"], "add board");
        assert_eq!(result["entries"][0]["input"]["title"], "b");
        assert_eq!(result["entries"][0]["actor"], "tester");
        assert_eq!(result["entries"][0]["resources"], serde_json::json!(["2"]));
    }

    #[tokio::test]
    async fn test_failed_mutation_is_recorded() {
        let ctx = TackboardContext::new();
        let processor = TackboardOperationProcessor::new();

        let err = processor
            .process(&crate::board::DeleteBoard::new(4u64), &ctx)
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let activity = ctx.activity(None).await;
        assert_eq!(activity.len(), 1);
        assert!(activity[0].entry.is_failure());
        assert!(activity[0].entry.actor.is_none());
    }
}
