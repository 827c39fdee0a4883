//! Practice log commands

mod delete;
mod delete_week;
mod list_sessions;
mod list_weeks;
mod log;
mod mv;

pub use delete::DeleteSession;
pub use delete_week::DeleteWeek;
pub use list_sessions::ListSessions;
pub use list_weeks::ListWeeks;
pub use log::LogSession;
pub use mv::MoveSession;
