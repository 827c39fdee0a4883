//! Practice log records and week bucketing

use super::ids::{Child, EntityKind, Id, Kind};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type WeekId = Id<Week>;
pub type SessionId = Id<Session>;

/// First day of a practice week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// The first day of the week containing `date`.
    ///
    /// `None` only at the very start of chrono's calendar range.
    pub fn start_of(self, date: NaiveDate) -> Option<NaiveDate> {
        let back = match self {
            Self::Monday => date.weekday().num_days_from_monday(),
            Self::Sunday => date.weekday().num_days_from_sunday(),
        };
        date.checked_sub_days(Days::new(u64::from(back)))
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monday => f.write_str("monday"),
            Self::Sunday => f.write_str("sunday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "sunday" | "sun" => Ok(Self::Sunday),
            other => Err(format!("unknown week start '{}'", other)),
        }
    }
}

/// A seven-day bucket of practice sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl Week {
    pub fn starting(starts_on: NaiveDate) -> Self {
        Self {
            starts_on,
            ends_on: starts_on
                .checked_add_days(Days::new(6))
                .unwrap_or(NaiveDate::MAX),
        }
    }
}

impl Kind for Week {
    const KIND: EntityKind = EntityKind::Week;
}

/// One logged practice session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub date: NaiveDate,
    pub minutes: u32,
    pub piece: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Session {
    pub fn new(date: NaiveDate, minutes: u32, piece: impl Into<String>) -> Self {
        Self {
            date,
            minutes,
            piece: piece.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl Kind for Session {
    const KIND: EntityKind = EntityKind::Session;
}

impl Child for Session {
    type Parent = Week;
    const PARENT_FIELD: &'static str = "week_id";
}
