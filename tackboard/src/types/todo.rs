//! To-do records

use super::ids::{Child, EntityKind, Id, Kind};
use serde::{Deserialize, Serialize};

pub type TodoListId = Id<TodoList>;
pub type TodoId = Id<Todo>;

/// A named list of to-do items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub title: String,
}

impl TodoList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Kind for TodoList {
    const KIND: EntityKind = EntityKind::TodoList;
}

/// One to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }
}

impl Kind for Todo {
    const KIND: EntityKind = EntityKind::Todo;
}

impl Child for Todo {
    type Parent = TodoList;
    const PARENT_FIELD: &'static str = "todolist_id";
}
