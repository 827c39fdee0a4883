//! Core types for the tackboard engine

mod board;
mod ids;
mod log;
mod operation;
mod practice;
mod todo;

// Re-export all types
pub use board::{Board, BoardId, Card, CardId, List, ListId};
pub use ids::{Child, EntityKind, Id, IdAllocator, Kind};
pub use log::OperationResult;
pub use operation::{Noun, Operation, Verb};
pub use practice::{Session, SessionId, Week, WeekId, WeekStart};
pub use todo::{Todo, TodoId, TodoList, TodoListId};
