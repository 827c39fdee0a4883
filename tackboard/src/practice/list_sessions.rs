//! ListSessions command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::WeekId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List the sessions of a week in order
#[operation(
    verb = "list",
    noun = "sessions",
    description = "List a week's practice sessions in order"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ListSessions {
    /// The week ID
    pub week_id: WeekId,
}

impl ListSessions {
    pub fn new(week_id: impl Into<WeekId>) -> Self {
        Self {
            week_id: week_id.into(),
        }
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for ListSessions {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let result: Result<Value> = async {
            let workspace = ctx.read().await;
            let week = workspace.practice.summary(self.week_id)?;
            let sessions = workspace.practice.sessions(self.week_id)?;
            Ok(serde_json::json!({
                "week": week,
                "count": sessions.len(),
                "sessions": sessions,
            }))
        }
        .await;

        ExecutionResult::unlogged(result)
    }
}
