//! The three record-keeping apps sharing one ordering core

mod boards;
mod practice;
mod todos;

pub use boards::{BoardRemoval, BoardTree, BoardView, ListView};
pub use practice::{PracticeLog, WeekSummary};
pub use todos::TodoBook;

use crate::types::WeekStart;

/// Everything one context owns
#[derive(Debug, Default)]
pub struct Workspace {
    pub boards: BoardTree,
    pub todos: TodoBook,
    pub practice: PracticeLog,
}

impl Workspace {
    pub fn new(week_start: WeekStart) -> Self {
        Self {
            boards: BoardTree::new(),
            todos: TodoBook::new(),
            practice: PracticeLog::new(week_start),
        }
    }
}
