//! Route parsed operations to their command structs
//!
//! [`dispatch`] turns one [`Operation`] into the matching command, runs it
//! through the processor and returns its raw value. [`execute_operation`]
//! and [`execute_input`] wrap that into [`OperationResult`]s for callers
//! that speak JSON.

use crate::activity::ListActivity;
use crate::board::{AddBoard, DeleteBoard, GetBoard, ListBoards, UpdateBoard};
use crate::card::{AddCard, DeleteCard, GetCard, ListCards, MoveCard, UpdateCard};
use crate::context::TackboardContext;
use crate::error::{ErrorSeverity, Result, Severity, TackboardError};
use crate::list::{AddList, DeleteList, ListLists, MoveList, UpdateList};
use crate::parse::parse_operation;
use crate::practice::{
    DeleteSession, DeleteWeek, ListSessions, ListWeeks, LogSession, MoveSession,
};
use crate::processor::TackboardOperationProcessor;
use crate::todo::{
    AddTodo, AddTodoList, CompleteTodo, DeleteTodo, DeleteTodoList, ListTodoLists, ListTodos,
    MoveTodo, UpdateTodo,
};
use crate::types::{Noun, Operation, OperationResult, Verb};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Instant;
use tackboard_operations::{Execute, OperationProcessor};

/// Execute one parsed operation and return its value
pub async fn dispatch(
    processor: &TackboardOperationProcessor,
    ctx: &TackboardContext,
    operation: &Operation,
) -> Result<Value> {
    // A per-operation actor wins over the processor default
    let actor_processor;
    let processor = match &operation.actor {
        Some(actor) => {
            actor_processor = TackboardOperationProcessor::with_actor(actor.clone());
            &actor_processor
        }
        None => processor,
    };

    let params = Value::Object(operation.params.clone());
    tracing::debug!(op = %operation.op_string(), params = %params, "dispatching");

    match (operation.verb, operation.noun) {
        (Verb::Add, Noun::Board) => run::<AddBoard>(processor, ctx, params).await,
        (Verb::Get, Noun::Board) => run::<GetBoard>(processor, ctx, params).await,
        (Verb::List, Noun::Boards) => run::<ListBoards>(processor, ctx, params).await,
        (Verb::Update, Noun::Board) => run::<UpdateBoard>(processor, ctx, params).await,
        (Verb::Delete, Noun::Board) => run::<DeleteBoard>(processor, ctx, params).await,

        (Verb::Add, Noun::List) => run::<AddList>(processor, ctx, params).await,
        (Verb::Update, Noun::List) => run::<UpdateList>(processor, ctx, params).await,
        (Verb::Move, Noun::List) => run::<MoveList>(processor, ctx, params).await,
        (Verb::Delete, Noun::List) => run::<DeleteList>(processor, ctx, params).await,
        (Verb::List, Noun::Lists) => run::<ListLists>(processor, ctx, params).await,

        (Verb::Add, Noun::Card) => run::<AddCard>(processor, ctx, params).await,
        (Verb::Get, Noun::Card) => run::<GetCard>(processor, ctx, params).await,
        (Verb::Update, Noun::Card) => run::<UpdateCard>(processor, ctx, params).await,
        (Verb::Move, Noun::Card) => run::<MoveCard>(processor, ctx, params).await,
        (Verb::Delete, Noun::Card) => run::<DeleteCard>(processor, ctx, params).await,
        (Verb::List, Noun::Cards) => run::<ListCards>(processor, ctx, params).await,

        (Verb::Add, Noun::TodoList) => run::<AddTodoList>(processor, ctx, params).await,
        (Verb::List, Noun::TodoLists) => run::<ListTodoLists>(processor, ctx, params).await,
        (Verb::Delete, Noun::TodoList) => run::<DeleteTodoList>(processor, ctx, params).await,

        (Verb::Add, Noun::Todo) => run::<AddTodo>(processor, ctx, params).await,
        (Verb::Update, Noun::Todo) => run::<UpdateTodo>(processor, ctx, params).await,
        (Verb::Complete, Noun::Todo) => run::<CompleteTodo>(processor, ctx, params).await,
        (Verb::Move, Noun::Todo) => run::<MoveTodo>(processor, ctx, params).await,
        (Verb::Delete, Noun::Todo) => run::<DeleteTodo>(processor, ctx, params).await,
        (Verb::List, Noun::Todos) => run::<ListTodos>(processor, ctx, params).await,

        (Verb::Log, Noun::Session) => run::<LogSession>(processor, ctx, params).await,
        (Verb::Move, Noun::Session) => run::<MoveSession>(processor, ctx, params).await,
        (Verb::Delete, Noun::Session) => run::<DeleteSession>(processor, ctx, params).await,
        (Verb::List, Noun::Sessions) => run::<ListSessions>(processor, ctx, params).await,
        (Verb::List, Noun::Weeks) => run::<ListWeeks>(processor, ctx, params).await,
        (Verb::Delete, Noun::Week) => run::<DeleteWeek>(processor, ctx, params).await,

        (Verb::List, Noun::Activity) => run::<ListActivity>(processor, ctx, params).await,

        (verb, noun) => Err(TackboardError::InvalidOperation {
            verb: verb.to_string(),
            noun: noun.to_string(),
        }),
    }
}

/// Deserialize the command from its parameters and process it
async fn run<T>(
    processor: &TackboardOperationProcessor,
    ctx: &TackboardContext,
    params: Value,
) -> Result<Value>
where
    T: DeserializeOwned + Execute<TackboardContext, TackboardError> + Send + Sync,
{
    let command: T = serde_json::from_value(params).map_err(param_error)?;
    processor.process(&command, ctx).await
}

/// Map serde's parameter complaints onto the input error variants
fn param_error(err: serde_json::Error) -> TackboardError {
    let message = err.to_string();
    match message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        Some(field) => TackboardError::missing_field(field),
        None => TackboardError::parse(message),
    }
}

/// Execute one operation and wrap the outcome for external callers.
///
/// NotFound comes back as `ok: false, data: null` like any failure; it is
/// logged at warn level rather than error.
pub async fn execute_operation(
    processor: &TackboardOperationProcessor,
    ctx: &TackboardContext,
    operation: &Operation,
) -> OperationResult {
    let start = Instant::now();
    let op = operation.op_string();
    let result = dispatch(processor, ctx, operation).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(data) => OperationResult::success(op, data, duration_ms),
        Err(err) => {
            match err.severity() {
                ErrorSeverity::Warning | ErrorSeverity::Error => {
                    tracing::warn!(%op, error = %err, "operation failed")
                }
                ErrorSeverity::Critical => tracing::error!(%op, error = %err, "operation failed"),
            }
            OperationResult::failure(Some(op), err.to_string(), duration_ms)
        }
    }
}

/// Parse and execute raw JSON input, one result per operation.
///
/// Array elements are parsed one at a time, so a malformed element fails
/// on its own without sinking the rest of the batch.
pub async fn execute_input(
    processor: &TackboardOperationProcessor,
    ctx: &TackboardContext,
    input: Value,
) -> Vec<OperationResult> {
    let items = match input {
        Value::Array(items) => items,
        other => vec![other],
    };

    let mut results = Vec::with_capacity(items.len());
    for item in items {
        results.push(execute_value(processor, ctx, item).await);
    }
    results
}

/// Parse and execute a single JSON operation
pub async fn execute_value(
    processor: &TackboardOperationProcessor,
    ctx: &TackboardContext,
    input: Value,
) -> OperationResult {
    match parse_operation(input) {
        Ok(operation) => execute_operation(processor, ctx, &operation).await,
        Err(err) => {
            tracing::warn!(error = %err, "unparseable operation");
            OperationResult::failure(None, err.to_string(), 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn run_all(ctx: &TackboardContext, input: Value) -> Vec<OperationResult> {
        execute_input(&TackboardOperationProcessor::new(), ctx, input).await
    }

    #[tokio::test]
    async fn test_batch_runs_in_order() {
        let ctx = TackboardContext::new();
        let results = run_all(
            &ctx,
            json!([
                { "op": "add board", "title": "B" },
                { "op": "add list", "board_id": 1, "title": "Todo" },
                { "list_id": 1, "title": "first" },
                { "add": "card", "listId": "1", "name": "second" },
                { "op": "list cards", "list_id": 1 }
            ]),
        )
        .await;

        assert!(results.iter().all(|r| r.ok));
        let cards = &results[4].data["cards"];
        assert_eq!(cards[0]["title"], "first");
        assert_eq!(cards[1]["title"], "second");
        assert_eq!(cards[1]["position"], 1);
    }

    #[tokio::test]
    async fn test_not_found_is_null() {
        let ctx = TackboardContext::new();
        let results = run_all(&ctx, json!({ "op": "get card", "id": 3 })).await;

        assert!(!results[0].ok);
        assert!(results[0].data.is_null());
        assert_eq!(results[0].error.as_deref(), Some("card not found: 3"));
        assert_eq!(results[0].op.as_deref(), Some("get card"));
    }

    #[tokio::test]
    async fn test_bad_element_does_not_sink_batch() {
        let ctx = TackboardContext::new();
        let results = run_all(
            &ctx,
            json!([
                { "op": "add board", "title": "B" },
                "not an object",
                { "op": "add board", "title": "C" }
            ]),
        )
        .await;

        assert_eq!(results.len(), 3);
        assert!(results[0].ok);
        assert!(!results[1].ok);
        assert!(results[1].op.is_none());
        assert_eq!(results[2].get_id(), Some(2));
    }

    #[tokio::test]
    async fn test_missing_field() {
        let ctx = TackboardContext::new();
        let results = run_all(&ctx, json!({ "op": "add list", "title": "orphan" })).await;
        assert_eq!(
            results[0].error.as_deref(),
            Some("missing required field: board_id")
        );
    }

    #[tokio::test]
    async fn test_unsupported_pair() {
        let ctx = TackboardContext::new();
        let results = run_all(&ctx, json!({ "op": "complete card", "id": 1 })).await;
        assert_eq!(
            results[0].error.as_deref(),
            Some("invalid operation: complete card")
        );
    }

    #[tokio::test]
    async fn test_operation_actor_overrides_default() {
        let ctx = TackboardContext::new();
        let processor = TackboardOperationProcessor::with_actor("default");
        execute_input(
            &processor,
            &ctx,
            json!([
                { "op": "add board", "title": "a" },
                { "op": "add board", "title": "b", "actor": "bob" }
            ]),
        )
        .await;

        let activity = ctx.activity(None).await;
        assert_eq!(activity[0].entry.actor.as_deref(), Some("bob"));
        assert_eq!(activity[1].entry.actor.as_deref(), Some("default"));
    }
}
