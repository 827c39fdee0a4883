//! LogSession command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use crate::types::Session;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Log a practice session into the week its date falls in
#[operation(
    verb = "log",
    noun = "session",
    description = "Log a practice session, creating its week on first use"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct LogSession {
    /// Day practiced (YYYY-MM-DD)
    #[serde(alias = "day")]
    pub date: NaiveDate,
    /// Minutes practiced
    #[serde(alias = "mins", alias = "duration")]
    pub minutes: u32,
    /// What was practiced
    pub piece: String,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "notes_text")]
    pub notes: Option<String>,
}

impl LogSession {
    pub fn new(date: NaiveDate, minutes: u32, piece: impl Into<String>) -> Self {
        Self {
            date,
            minutes,
            piece: piece.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for LogSession {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or(Value::Null);

        let result: Result<Value> = async {
            if self.minutes == 0 {
                return Err(TackboardError::invalid_value("minutes", "must be at least 1"));
            }

            let session = Session {
                date: self.date,
                minutes: self.minutes,
                piece: self.piece.clone(),
                notes: self.notes.clone(),
            };

            let mut workspace = ctx.write().await;
            let (id, week) = {
                let entry = workspace.practice.log_session(session)?;
                (entry.id, entry.container)
            };
            tracing::info!(?id, ?week, minutes = self.minutes, "session logged");

            let mut value = serde_json::to_value(workspace.practice.session(id)?)?;
            value["week"] = serde_json::to_value(workspace.practice.summary(week)?)?;
            Ok(value)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::logged(self.op_string(), input, result, duration_ms)
    }
}
