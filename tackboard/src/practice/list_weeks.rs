//! ListWeeks command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List practice weeks in date order with totals
#[operation(
    verb = "list",
    noun = "weeks",
    description = "List practice weeks in date order with minute totals"
)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListWeeks {}

impl ListWeeks {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for ListWeeks {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let result: Result<Value> = async {
            let workspace = ctx.read().await;
            let weeks = workspace.practice.weeks()?;
            let total_minutes: u64 = weeks.iter().map(|w| w.total_minutes).sum();
            Ok(serde_json::json!({
                "week_start": workspace.practice.week_start(),
                "count": weeks.len(),
                "total_minutes": total_minutes,
                "weeks": weeks,
            }))
        }
        .await;

        ExecutionResult::unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::LogSession;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_list_weeks_in_date_order() {
        let ctx = TackboardContext::new();
        for (day, minutes) in [(20, 15), (5, 30), (6, 45)] {
            let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
            LogSession::new(date, minutes, "Etude")
                .execute(&ctx)
                .await
                .into_result()
                .unwrap();
        }

        let result = ListWeeks::new().execute(&ctx).await.into_result().unwrap();
        assert_eq!(result["week_start"], "monday");
        assert_eq!(result["count"], 2);
        assert_eq!(result["total_minutes"], 90);
        assert_eq!(result["weeks"][0]["starts_on"], "2024-03-04");
        assert_eq!(result["weeks"][0]["total_minutes"], 75);
        assert_eq!(result["weeks"][1]["starts_on"], "2024-03-18");
        assert_eq!(result["weeks"][1]["session_count"], 1);
    }
}
