//! Board-level records: Board, List, Card

use super::ids::{Child, EntityKind, Id, Kind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type BoardId = Id<Board>;
pub type ListId = Id<List>;
pub type CardId = Id<Card>;

/// A board owns an ordered run of lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Kind for Board {
    const KIND: EntityKind = EntityKind::Board;
}

/// A list sits at a position on its board and owns an ordered run of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub title: String,
}

impl List {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Kind for List {
    const KIND: EntityKind = EntityKind::List;
}

impl Child for List {
    type Parent = Board;
    const PARENT_FIELD: &'static str = "board_id";
}

/// A card sits at a position in its list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }
}

impl Kind for Card {
    const KIND: EntityKind = EntityKind::Card;
}

impl Child for Card {
    type Parent = List;
    const PARENT_FIELD: &'static str = "list_id";
}
