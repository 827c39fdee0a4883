//! List commands

mod add;
mod delete;
mod list;
mod mv;
mod update;

pub use add::AddList;
pub use delete::DeleteList;
pub use list::ListLists;
pub use mv::MoveList;
pub use update::UpdateList;
