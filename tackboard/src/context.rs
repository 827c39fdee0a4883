//! TackboardContext - shared access to one in-memory workspace
//!
//! The context owns the [`Workspace`] behind a single `RwLock`: a mutating
//! operation holds the write guard for its whole run, reads share the read
//! guard. It also keeps the bounded activity log that the processor feeds;
//! a mutation holds the commit turn until its entry is recorded, so the log
//! lists mutations in the order they were applied.
//! No business logic lives here; operations do the work.

use crate::types::WeekStart;
use crate::workspace::Workspace;
use serde::Serialize;
use std::collections::VecDeque;
use tackboard_operations::LogEntry;
use tokio::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Default number of activity entries kept in memory
pub const DEFAULT_ACTIVITY_LIMIT: usize = 1000;

/// One recorded mutation and the resources it touched
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    #[serde(flatten)]
    pub entry: LogEntry,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

/// Context passed to every operation
#[derive(Debug)]
pub struct TackboardContext {
    workspace: RwLock<Workspace>,
    commit: Mutex<()>,
    activity: Mutex<VecDeque<Activity>>,
    activity_limit: usize,
}

impl TackboardContext {
    /// Create an empty context with Monday weeks
    pub fn new() -> Self {
        Self {
            workspace: RwLock::new(Workspace::new(WeekStart::default())),
            commit: Mutex::new(()),
            activity: Mutex::new(VecDeque::new()),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }

    /// Bucket practice weeks starting on `week_start`
    pub fn with_week_start(self, week_start: WeekStart) -> Self {
        Self {
            workspace: RwLock::new(Workspace::new(week_start)),
            ..self
        }
    }

    /// Keep at most `limit` activity entries, dropping the oldest first
    pub fn with_activity_limit(mut self, limit: usize) -> Self {
        self.activity_limit = limit;
        self
    }

    pub fn activity_limit(&self) -> usize {
        self.activity_limit
    }

    // =========================================================================
    // Workspace access
    // =========================================================================

    /// Shared access for reads
    pub async fn read(&self) -> RwLockReadGuard<'_, Workspace> {
        self.workspace.read().await
    }

    /// Exclusive access for mutations
    pub async fn write(&self) -> RwLockWriteGuard<'_, Workspace> {
        self.workspace.write().await
    }

    // =========================================================================
    // Activity
    // =========================================================================

    /// Exclusive turn for one mutation and its activity entry
    pub(crate) async fn commit_turn(&self) -> MutexGuard<'_, ()> {
        self.commit.lock().await
    }

    /// Append an entry, evicting the oldest once the limit is reached
    pub async fn record_activity(&self, entry: LogEntry, resources: Vec<String>) {
        if self.activity_limit == 0 {
            return;
        }
        let mut activity = self.activity.lock().await;
        while activity.len() >= self.activity_limit {
            activity.pop_front();
        }
        activity.push_back(Activity { entry, resources });
    }

    /// Recorded activity, newest first
    pub async fn activity(&self, limit: Option<usize>) -> Vec<Activity> {
        let activity = self.activity.lock().await;
        activity
            .iter()
            .rev()
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

impl Default for TackboardContext {
    fn default() -> Self {
        Self::new()
    }
}
