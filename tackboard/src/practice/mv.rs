//! MoveSession command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::store::slot;
use crate::types::{SessionId, WeekId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Reorder a session within a week or into another week
#[operation(
    verb = "move",
    noun = "session",
    description = "Move a session to a position in the same or another week"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveSession {
    /// The session to move
    pub id: SessionId,
    /// Destination week
    pub week_id: WeekId,
    /// Zero-based slot; omitted or past the end appends, negative goes first
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "pos", alias = "index")]
    pub position: Option<i64>,
}

impl MoveSession {
    pub fn new(id: impl Into<SessionId>, week_id: impl Into<WeekId>) -> Self {
        Self {
            id: id.into(),
            week_id: week_id.into(),
            position: None,
        }
    }

    pub fn to_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for MoveSession {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            let mut workspace = ctx.write().await;
            let position = slot(self.position);
            let session = workspace
                .practice
                .move_session(self.id, self.week_id, position)?;
            tracing::info!(id = ?session.id, week = ?session.container, position = session.position, "session moved");
            Ok(serde_json::to_value(session)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::LogSession;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_move_session_within_week() {
        let ctx = TackboardContext::new();
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        for piece in ["a", "b", "c"] {
            LogSession::new(day, 10, piece)
                .execute(&ctx)
                .await
                .into_result()
                .unwrap();
        }

        let moved = MoveSession::new(3u64, 1u64)
            .to_position(0)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(moved["piece"], "c");
        assert_eq!(moved["position"], 0);
    }

    #[tokio::test]
    async fn test_move_session_to_missing_week() {
        let ctx = TackboardContext::new();
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        LogSession::new(day, 10, "a").execute(&ctx).await.into_result().unwrap();

        let err = MoveSession::new(1u64, 2u64)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "week not found: 2");
    }
}
