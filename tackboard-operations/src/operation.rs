//! The `Operation` metadata trait and the `Execute` behavior trait

use crate::{ExecutionResult, ParamMeta};
use async_trait::async_trait;
use serde_json::Value;

/// Static description of an operation, normally derived by `#[operation]`
pub trait Operation: Send + Sync {
    /// The action, e.g. `"move"`
    fn verb(&self) -> &'static str;

    /// The target, e.g. `"card"`
    fn noun(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Parameter metadata derived from the struct fields
    fn parameters(&self) -> &'static [ParamMeta];

    /// Canonical `"<verb> <noun>"` string
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a context `C`, failing with `E`
#[async_trait]
pub trait Execute<C, E>: Operation
where
    C: Send + Sync,
{
    /// Execute the operation
    async fn execute(&self, ctx: &C) -> ExecutionResult<Value, E>;

    /// Resource IDs touched by this operation, used to index activity.
    ///
    /// The default picks up a top-level `"id"` in the result.
    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        match result.get("id") {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Number(n)) => vec![n.to_string()],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    impl Operation for Ping {
        fn verb(&self) -> &'static str {
            "get"
        }
        fn noun(&self) -> &'static str {
            "ping"
        }
        fn description(&self) -> &'static str {
            "Liveness check"
        }
        fn parameters(&self) -> &'static [ParamMeta] {
            &[]
        }
    }

    #[async_trait]
    impl Execute<(), String> for Ping {
        async fn execute(&self, _ctx: &()) -> ExecutionResult<Value, String> {
            ExecutionResult::Unlogged {
                value: serde_json::json!({"id": 7}),
            }
        }
    }

    #[tokio::test]
    async fn test_op_string_and_affected_ids() {
        let op = Ping;
        assert_eq!(op.op_string(), "get ping");

        let value = op.execute(&()).await.into_result().unwrap();
        assert_eq!(op.affected_resource_ids(&value), vec!["7".to_string()]);
    }
}
