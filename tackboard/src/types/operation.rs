//! Parsed operations: verb + noun + normalized parameters

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// What an operation does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Add,
    Get,
    List,
    Update,
    Move,
    Delete,
    Complete,
    Log,
}

impl Verb {
    /// Resolve a verb or one of its aliases
    pub fn from_alias(s: &str) -> Option<Self> {
        let verb = match s.trim().to_ascii_lowercase().as_str() {
            "add" | "create" | "new" | "insert" => Self::Add,
            "get" | "show" | "read" => Self::Get,
            "list" | "ls" | "query" => Self::List,
            "update" | "edit" | "rename" | "set" => Self::Update,
            "move" | "mv" | "reposition" | "reorder" => Self::Move,
            "delete" | "rm" | "remove" => Self::Delete,
            "complete" | "done" | "finish" | "check" => Self::Complete,
            "log" | "record" => Self::Log,
            _ => return None,
        };
        Some(verb)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Get => "get",
            Self::List => "list",
            Self::Update => "update",
            Self::Move => "move",
            Self::Delete => "delete",
            Self::Complete => "complete",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an operation acts on. Collection reads use the plural form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Noun {
    Board,
    Boards,
    List,
    Lists,
    Card,
    Cards,
    TodoList,
    TodoLists,
    Todo,
    Todos,
    Session,
    Sessions,
    Week,
    Weeks,
    Activity,
}

impl Noun {
    /// Parse a noun, ignoring case and `_`/`-`/space separators
    pub fn parse(s: &str) -> Option<Self> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let noun = match folded.as_str() {
            "board" => Self::Board,
            "boards" => Self::Boards,
            "list" | "column" => Self::List,
            "lists" | "columns" => Self::Lists,
            "card" => Self::Card,
            "cards" => Self::Cards,
            "todolist" => Self::TodoList,
            "todolists" => Self::TodoLists,
            "todo" | "item" => Self::Todo,
            "todos" | "items" => Self::Todos,
            "session" => Self::Session,
            "sessions" => Self::Sessions,
            "week" => Self::Week,
            "weeks" => Self::Weeks,
            "activity" | "log" | "history" => Self::Activity,
            _ => return None,
        };
        Some(noun)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Boards => "boards",
            Self::List => "list",
            Self::Lists => "lists",
            Self::Card => "card",
            Self::Cards => "cards",
            Self::TodoList => "todolist",
            Self::TodoLists => "todolists",
            Self::Todo => "todo",
            Self::Todos => "todos",
            Self::Session => "session",
            Self::Sessions => "sessions",
            Self::Week => "week",
            Self::Weeks => "weeks",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed, not yet executed, operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub verb: Verb,
    pub noun: Noun,
    pub params: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl Operation {
    pub fn new(verb: Verb, noun: Noun, params: Map<String, Value>) -> Self {
        Self {
            verb,
            noun,
            params,
            actor: None,
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Canonical `"<verb> <noun>"` string
    pub fn op_string(&self) -> String {
        format!("{} {}", self.verb, self.noun)
    }
}
