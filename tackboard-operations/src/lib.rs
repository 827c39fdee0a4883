//! # Tackboard Operations
//!
//! Every mutation or query against a tackboard workspace is an operation: a
//! plain struct whose fields are its parameters. The `#[operation]` attribute
//! derives the [`Operation`] metadata (verb, noun, description, parameters)
//! from the struct itself, and the [`Execute`] trait supplies the behavior
//! against some context type.
//!
//! ## Example
//!
//! ```ignore
//! use tackboard_operations::*;
//!
//! #[operation(verb = "add", noun = "card", description = "Append a card to a list")]
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct AddCard {
//!     /// List that receives the card
//!     pub list_id: ListId,
//!     /// Card title
//!     pub title: String,
//! }
//!
//! #[async_trait]
//! impl Execute<TackboardContext, TackboardError> for AddCard {
//!     async fn execute(&self, ctx: &TackboardContext) -> ExecutionResult<Value, TackboardError> {
//!         // mutate the workspace, return ExecutionResult::Logged
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod parameter;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use parameter::{ParamMeta, ParamType};
pub use processor::OperationProcessor;

// Re-export proc macros
pub use tackboard_operations_macros::operation;

// Re-export for use in implementations
pub use async_trait::async_trait;
pub use serde_json::Value;
