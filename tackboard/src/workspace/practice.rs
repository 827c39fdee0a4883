//! Practice sessions bucketed into weeks

use crate::error::{Result, TackboardError};
use crate::store::{Catalog, Entry, OrderedStore};
use crate::types::{Session, SessionId, Week, WeekId, WeekStart};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One week with its totals, as listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    pub id: WeekId,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub session_count: usize,
    pub total_minutes: u64,
}

/// Sessions are never created directly inside a week. Logging a session
/// finds the week its date falls in, creating that week on first use.
#[derive(Debug, Default)]
pub struct PracticeLog {
    week_start: WeekStart,
    weeks: Catalog<Week>,
    by_start: BTreeMap<NaiveDate, WeekId>,
    sessions: OrderedStore<Session>,
}

impl PracticeLog {
    pub fn new(week_start: WeekStart) -> Self {
        Self {
            week_start,
            ..Self::default()
        }
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Append a session to the week containing its date
    pub fn log_session(&mut self, session: Session) -> Result<&Entry<Session>> {
        let starts_on = self.week_start.start_of(session.date).ok_or_else(|| {
            TackboardError::invalid_value("date", format!("{} is out of range", session.date))
        })?;

        let week = match self.by_start.get(&starts_on) {
            Some(week) => *week,
            None => {
                let week = self.weeks.insert(Week::starting(starts_on));
                self.by_start.insert(starts_on, week);
                self.sessions.open(week);
                tracing::debug!(?week, %starts_on, "opened practice week");
                week
            }
        };

        self.sessions.insert(week, session)
    }

    pub fn session(&self, id: SessionId) -> Result<&Entry<Session>> {
        self.sessions.get(id)
    }

    pub fn sessions(&self, week: WeekId) -> Result<Vec<&Entry<Session>>> {
        self.sessions.children(week)
    }

    /// Reorder a session, possibly into another existing week. The session
    /// keeps its date.
    pub fn move_session(
        &mut self,
        id: SessionId,
        week: WeekId,
        position: usize,
    ) -> Result<&Entry<Session>> {
        self.sessions.move_to(id, week, position)
    }

    pub fn delete_session(&mut self, id: SessionId) -> Result<Entry<Session>> {
        self.sessions.remove(id)
    }

    /// Weeks in date order with their totals
    pub fn weeks(&self) -> Result<Vec<WeekSummary>> {
        self.by_start
            .values()
            .map(|id| self.summary(*id))
            .collect()
    }

    pub fn summary(&self, id: WeekId) -> Result<WeekSummary> {
        let week = self.weeks.get(id)?;
        let sessions = self.sessions.children(id)?;
        Ok(WeekSummary {
            id,
            starts_on: week.starts_on,
            ends_on: week.ends_on,
            session_count: sessions.len(),
            total_minutes: sessions
                .iter()
                .map(|s| u64::from(s.record.minutes))
                .sum(),
        })
    }

    /// Delete a week and its sessions, returning how many sessions went
    pub fn delete_week(&mut self, id: WeekId) -> Result<usize> {
        let starts_on = self.weeks.get(id)?.starts_on;
        let removed = self.sessions.close(id)?.len();
        self.weeks.remove(id)?;
        self.by_start.remove(&starts_on);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn log(practice: &mut PracticeLog, day: &str, minutes: u32, piece: &str) -> (WeekId, SessionId) {
        let entry = practice
            .log_session(Session::new(date(day), minutes, piece))
            .unwrap();
        (entry.container, entry.id)
    }

    #[test]
    fn test_same_week_shares_bucket() {
        let mut practice = PracticeLog::new(WeekStart::Monday);
        let (w1, _) = log(&mut practice, "2024-03-04", 30, "Scales");
        let (w2, _) = log(&mut practice, "2024-03-10", 45, "Bach");
        let (w3, _) = log(&mut practice, "2024-03-11", 20, "Bach");

        assert_eq!(w1, w2);
        assert_ne!(w1, w3);
        assert_eq!(practice.sessions(w1).unwrap().len(), 2);
    }

    #[test]
    fn test_weeks_listed_by_date_with_totals() {
        let mut practice = PracticeLog::new(WeekStart::Monday);
        log(&mut practice, "2024-03-13", 25, "Etude");
        log(&mut practice, "2024-03-05", 30, "Scales");
        log(&mut practice, "2024-03-06", 15, "Scales");

        let weeks = practice.weeks().unwrap();
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].starts_on, date("2024-03-04"));
        assert_eq!(weeks[0].total_minutes, 45);
        assert_eq!(weeks[0].session_count, 2);
        assert_eq!(weeks[1].starts_on, date("2024-03-11"));
        assert_eq!(weeks[1].ends_on, date("2024-03-17"));
        assert_eq!(weeks[1].total_minutes, 25);
        // The later week was created first
        assert_eq!(weeks[1].id.get(), 1);
    }

    #[test]
    fn test_sunday_start_splits_differently() {
        let mut practice = PracticeLog::new(WeekStart::Sunday);
        let (w1, _) = log(&mut practice, "2024-03-09", 10, "a");
        let (w2, _) = log(&mut practice, "2024-03-10", 10, "b");
        assert_ne!(w1, w2);
        assert_eq!(practice.weeks().unwrap()[1].starts_on, date("2024-03-10"));
    }

    #[test]
    fn test_delete_week_then_log_again_makes_new_week() {
        let mut practice = PracticeLog::new(WeekStart::Monday);
        let (week, session) = log(&mut practice, "2024-03-05", 30, "Scales");
        log(&mut practice, "2024-03-06", 30, "Scales");

        assert_eq!(practice.delete_week(week).unwrap(), 2);
        assert!(practice.session(session).unwrap_err().is_not_found());
        assert!(practice.weeks().unwrap().is_empty());

        let (again, _) = log(&mut practice, "2024-03-05", 30, "Scales");
        assert_ne!(again, week);
    }

    #[test]
    fn test_move_session_across_weeks() {
        let mut practice = PracticeLog::new(WeekStart::Monday);
        let (w1, s1) = log(&mut practice, "2024-03-05", 30, "a");
        let (w2, _) = log(&mut practice, "2024-03-12", 10, "b");

        let moved = practice.move_session(s1, w2, 0).unwrap();
        assert_eq!((moved.container, moved.position), (w2, 0));
        assert_eq!(moved.record.date, date("2024-03-05"));
        assert_eq!(practice.summary(w1).unwrap().session_count, 0);
        assert_eq!(practice.summary(w2).unwrap().total_minutes, 40);
    }
}
