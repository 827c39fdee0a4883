//! Card commands

mod add;
mod delete;
mod get;
mod list;
mod mv;
mod update;

pub use add::AddCard;
pub use delete::DeleteCard;
pub use get::GetCard;
pub use list::ListCards;
pub use mv::MoveCard;
pub use update::UpdateCard;
