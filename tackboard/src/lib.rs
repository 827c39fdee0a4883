//! In-memory engine for densely ordered records
//!
//! Three small record-keeping apps share one ordering core:
//!
//! - **Boards**: boards → lists → cards
//! - **Todos**: to-do lists → items
//! - **Practice log**: weeks → practice sessions, with weeks derived from
//!   session dates
//!
//! Every child carries a `position` that stays exactly `0..n-1` within its
//! container after every insert, move and delete. The ordering lives in
//! [`store::OrderedStore`] and is written once for all three apps.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use tackboard::{board::AddBoard, card::{AddCard, MoveCard}, list::AddList};
//! use tackboard::{Execute, TackboardContext};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = TackboardContext::new();
//! AddBoard::new("Sprint").execute(&ctx).await.into_result()?;
//! AddList::new(1u64, "Todo").execute(&ctx).await.into_result()?;
//! AddCard::new(1u64, "Write docs").execute(&ctx).await.into_result()?;
//!
//! let card = MoveCard::new(1u64, 1u64).to_position(0).execute(&ctx).await.into_result()?;
//! println!("card now at {}", card["position"]);
//! # Ok(())
//! # }
//! ```
//!
//! External callers usually go through [`dispatch::execute_input`], which
//! parses forgiving JSON input and returns one [`OperationResult`] per
//! operation.

mod context;
mod error;
pub mod parse;
mod processor;
pub mod store;
pub mod types;
pub mod workspace;

// Command modules
pub mod activity;
pub mod board;
pub mod card;
pub mod dispatch;
pub mod list;
pub mod practice;
pub mod schema;
pub mod todo;

// Re-export Execute trait and types from operations crate
pub use tackboard_operations::{
    async_trait, Execute, ExecutionResult, LogEntry, Operation, OperationProcessor,
};

pub use context::{Activity, TackboardContext, DEFAULT_ACTIVITY_LIMIT};
pub use error::{ErrorSeverity, Result, Severity, TackboardError};
pub use processor::TackboardOperationProcessor;

// Re-export commonly used types
pub use types::{
    Board, BoardId, Card, CardId, EntityKind, Id, List, ListId, Noun,
    Operation as TackboardOperation, OperationResult, Session, SessionId, Todo, TodoId, TodoList,
    TodoListId, Verb, Week, WeekId, WeekStart,
};
