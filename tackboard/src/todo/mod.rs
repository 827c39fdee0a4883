//! To-do list and item commands

mod add;
mod add_list;
mod complete;
mod delete;
mod delete_list;
mod list;
mod list_lists;
mod mv;
mod update;

pub use add::AddTodo;
pub use add_list::AddTodoList;
pub use complete::CompleteTodo;
pub use delete::DeleteTodo;
pub use delete_list::DeleteTodoList;
pub use list::ListTodos;
pub use list_lists::ListTodoLists;
pub use mv::MoveTodo;
pub use update::UpdateTodo;
