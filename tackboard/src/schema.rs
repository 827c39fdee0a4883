//! Operation catalog
//!
//! Lists every operation with the metadata `#[operation]` derived for it,
//! plus examples of the forgiving input forms.

use crate::activity::ListActivity;
use crate::board::{AddBoard, DeleteBoard, GetBoard, ListBoards, UpdateBoard};
use crate::card::{AddCard, DeleteCard, GetCard, ListCards, MoveCard, UpdateCard};
use crate::list::{AddList, DeleteList, ListLists, MoveList, UpdateList};
use crate::practice::{
    DeleteSession, DeleteWeek, ListSessions, ListWeeks, LogSession, MoveSession,
};
use crate::todo::{
    AddTodo, AddTodoList, CompleteTodo, DeleteTodo, DeleteTodoList, ListTodoLists, ListTodos,
    MoveTodo, UpdateTodo,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tackboard_operations::{Operation, ParamMeta};

/// One parameter in the catalog
#[derive(Debug, Clone, Serialize)]
pub struct ParamInfo {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub param_type: String,
    pub required: bool,
    pub description: &'static str,
    pub aliases: &'static [&'static str],
}

impl From<&ParamMeta> for ParamInfo {
    fn from(meta: &ParamMeta) -> Self {
        Self {
            name: meta.name,
            param_type: meta.param_type.to_string(),
            required: meta.required,
            description: meta.description,
            aliases: meta.aliases,
        }
    }
}

/// One operation in the catalog
#[derive(Debug, Clone, Serialize)]
pub struct OperationInfo {
    pub op: String,
    pub verb: &'static str,
    pub noun: &'static str,
    pub description: &'static str,
    pub params: Vec<ParamInfo>,
}

impl OperationInfo {
    fn of(operation: &dyn Operation) -> Self {
        Self {
            op: operation.op_string(),
            verb: operation.verb(),
            noun: operation.noun(),
            description: operation.description(),
            params: operation.parameters().iter().map(ParamInfo::from).collect(),
        }
    }
}

/// One instance of every operation, in catalog order
pub fn all_operations() -> Vec<Box<dyn Operation>> {
    let epoch = NaiveDate::default();
    vec![
        Box::new(AddBoard::new("")),
        Box::new(GetBoard::new(0u64)),
        Box::new(ListBoards::new()),
        Box::new(UpdateBoard::new(0u64)),
        Box::new(DeleteBoard::new(0u64)),
        Box::new(AddList::new(0u64, "")),
        Box::new(UpdateList::new(0u64, "")),
        Box::new(MoveList::new(0u64, 0u64)),
        Box::new(DeleteList::new(0u64)),
        Box::new(ListLists::new(0u64)),
        Box::new(AddCard::new(0u64, "")),
        Box::new(GetCard::new(0u64)),
        Box::new(UpdateCard::new(0u64)),
        Box::new(MoveCard::new(0u64, 0u64)),
        Box::new(DeleteCard::new(0u64)),
        Box::new(ListCards::new(0u64)),
        Box::new(AddTodoList::new("")),
        Box::new(ListTodoLists::new()),
        Box::new(DeleteTodoList::new(0u64)),
        Box::new(AddTodo::new(0u64, "")),
        Box::new(UpdateTodo::new(0u64)),
        Box::new(CompleteTodo::new(0u64)),
        Box::new(MoveTodo::new(0u64, 0u64)),
        Box::new(DeleteTodo::new(0u64)),
        Box::new(ListTodos::new(0u64)),
        Box::new(LogSession::new(epoch, 0, "")),
        Box::new(MoveSession::new(0u64, 0u64)),
        Box::new(DeleteSession::new(0u64)),
        Box::new(ListSessions::new(0u64)),
        Box::new(ListWeeks::new()),
        Box::new(DeleteWeek::new(0u64)),
        Box::new(ListActivity::new()),
    ]
}

/// Metadata for every operation
pub fn operation_catalog() -> Vec<OperationInfo> {
    all_operations()
        .iter()
        .map(|op| OperationInfo::of(op.as_ref()))
        .collect()
}

/// The full catalog as JSON, with verb aliases and input examples
pub fn catalog_json() -> Value {
    json!({
        "description": "Ordered boards, to-do lists and practice logs. Accepts forgiving input with aliases and inference.",
        "operations": operation_catalog(),
        "verb_aliases": verb_aliases(),
        "examples": examples(),
    })
}

fn verb_aliases() -> Map<String, Value> {
    let mut aliases = Map::new();

    aliases.insert("add".to_string(), json!(["create", "new", "insert"]));
    aliases.insert("get".to_string(), json!(["show", "read"]));
    aliases.insert("list".to_string(), json!(["ls", "query"]));
    aliases.insert("update".to_string(), json!(["edit", "rename", "set"]));
    aliases.insert("move".to_string(), json!(["mv", "reposition", "reorder"]));
    aliases.insert("delete".to_string(), json!(["rm", "remove"]));
    aliases.insert("complete".to_string(), json!(["done", "finish", "check"]));
    aliases.insert("log".to_string(), json!(["record"]));

    aliases
}

fn examples() -> Vec<Value> {
    vec![
        json!({
            "description": "Add a card - explicit op",
            "value": {"op": "add card", "list_id": 1, "title": "Fix login bug"}
        }),
        json!({
            "description": "Add a card - inferred from list_id and title",
            "value": {"list_id": 1, "title": "Fix login bug"}
        }),
        json!({
            "description": "Move a card to the top of another list",
            "value": {"op": "move card", "id": 4, "list_id": 2, "position": 0}
        }),
        json!({
            "description": "Move a card - shorthand",
            "value": {"move": "card", "id": 4, "list_id": 2, "position": 0}
        }),
        json!({
            "description": "Complete a to-do item",
            "value": {"op": "complete todo", "id": 3}
        }),
        json!({
            "description": "Log a practice session",
            "value": {"op": "log session", "date": "2024-03-05", "minutes": 30, "piece": "Scales"}
        }),
    ]
}
