//! ListTodoLists command

use crate::context::TackboardContext;
use crate::error::{Result, TackboardError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tackboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List all to-do lists by ID
#[operation(verb = "list", noun = "todolists", description = "List all to-do lists")]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListTodoLists {}

impl ListTodoLists {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Execute<TackboardContext, TackboardError> for ListTodoLists {
    async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
        let result: Result<Value> = async {
            let workspace = ctx.read().await;
            let lists = workspace.todos.lists();
            Ok(serde_json::json!({
                "count": lists.len(),
                "todolists": lists,
            }))
        }
        .await;

        ExecutionResult::unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::AddTodoList;

    #[tokio::test]
    async fn test_list_todolists() {
        let ctx = TackboardContext::new();
        AddTodoList::new("Home").execute(&ctx).await.into_result().unwrap();
        AddTodoList::new("Work").execute(&ctx).await.into_result().unwrap();

        let result = ListTodoLists::new().execute(&ctx).await.into_result().unwrap();
        assert_eq!(result["count"], 2);
        assert_eq!(result["todolists"][1]["title"], "Work");
        assert_eq!(result["todolists"][1]["id"], 2);
    }
}
