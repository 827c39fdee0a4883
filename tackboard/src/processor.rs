//! Processor that executes operations and feeds the activity log

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use async_trait::async_trait;
use serde_json::Value;
use tackboard_operations::{Execute, LogEntry, OperationProcessor};

/// Runs operations against a [`TackboardContext`].
///
/// Mutations come back with a log entry; the processor stamps it with the
/// configured actor and appends it to the context's activity log.
#[derive(Debug, Default, Clone)]
pub struct TackboardOperationProcessor {
    actor: Option<String>,
}

impl TackboardOperationProcessor {
    /// Create a processor that records activity without an actor
    pub fn new() -> Self {
        Self { actor: None }
    }

    /// Attribute every recorded entry to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

#[async_trait]
impl OperationProcessor<TackboardContext, TackboardError> for TackboardOperationProcessor {
    async fn process<T>(&self, operation: &T, ctx: &TackboardContext) -> Result<Value>
    where
        T: Execute<TackboardContext, TackboardError> + Send + Sync,
    {
        tracing::debug!(op = %operation.op_string(), "executing");

        let _turn = match operation.verb() {
            "get" | "list" => None,
            _ => Some(ctx.commit_turn().await),
        };

        let (result, log_entry) = operation.execute(ctx).await.split();

        if let Some(mut entry) = log_entry {
            if entry.actor.is_none() {
                if let Some(actor) = &self.actor {
                    entry = entry.with_actor(actor.clone());
                }
            }
            let affected = match &result {
                Ok(value) => operation.affected_resource_ids(value),
                Err(_) => Vec::new(),
            };
            self.write_log(ctx, &entry, &affected).await?;
        }

        match &result {
            Ok(_) => tracing::debug!(op = %operation.op_string(), "completed"),
            Err(err) => tracing::debug!(op = %operation.op_string(), error = %err, "failed"),
        }
        result
    }

    async fn write_log(
        &self,
        ctx: &TackboardContext,
        log_entry: &LogEntry,
        affected_resources: &[String],
    ) -> Result<()> {
        ctx.record_activity(log_entry.clone(), affected_resources.to_vec())
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;
    use crate::card::AddCard;
    use crate::list::AddList;
    use std::sync::Arc;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_activity_follows_mutation_order() {
        let ctx = Arc::new(TackboardContext::new());
        let processor = TackboardOperationProcessor::new();
        processor.process(&AddBoard::new("B"), &ctx).await.unwrap();
        processor.process(&AddList::new(1u64, "L"), &ctx).await.unwrap();

        let mut handles = Vec::new();
        for n in 0..32 {
            let ctx = ctx.clone();
            handles.push(tokio::spawn(async move {
                TackboardOperationProcessor::new()
                    .process(&AddCard::new(1u64, format!("card {}", n)), &ctx)
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // Card IDs are allocated under the write guard, so they follow the
        // order the mutations were applied in
        let card_ids: Vec<u64> = ctx
            .activity(None)
            .await
            .iter()
            .filter(|a| a.entry.op == "add card")
            .map(|a| a.resources[0].parse().unwrap())
            .collect();
        assert_eq!(card_ids, (1..=32).rev().collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn test_actor_stamped_on_entries() {
        let ctx = TackboardContext::new();
        TackboardOperationProcessor::with_actor("ci")
            .process(&AddBoard::new("B"), &ctx)
            .await
            .unwrap();

        let activity = ctx.activity(None).await;
        assert_eq!(activity[0].entry.actor.as_deref(), Some("ci"));
    }
}
