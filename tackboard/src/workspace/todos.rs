//! To-do lists and their items

use crate::error::{Result, TackboardError};
use crate::store::{Catalog, Entry, OrderedStore, Record};
use crate::types::{EntityKind, Todo, TodoId, TodoList, TodoListId};

#[derive(Debug, Default)]
pub struct TodoBook {
    lists: Catalog<TodoList>,
    todos: OrderedStore<Todo>,
}

impl TodoBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_list(&mut self, list: TodoList) -> TodoListId {
        let id = self.lists.insert(list);
        self.todos.open(id);
        id
    }

    pub fn list(&self, id: TodoListId) -> Result<Record<'_, TodoList>> {
        self.lists.record(id)
    }

    pub fn lists(&self) -> Vec<Record<'_, TodoList>> {
        self.lists.records().collect()
    }

    /// Delete a list and every item on it, returning how many items went
    pub fn delete_list(&mut self, id: TodoListId) -> Result<usize> {
        if !self.lists.contains(id) {
            return Err(TackboardError::not_found(EntityKind::TodoList, id.get()));
        }
        let removed = self.todos.close(id)?.len();
        self.lists.remove(id)?;
        Ok(removed)
    }

    pub fn add_todo(&mut self, list: TodoListId, todo: Todo) -> Result<&Entry<Todo>> {
        self.todos.insert(list, todo)
    }

    pub fn todo(&self, id: TodoId) -> Result<&Entry<Todo>> {
        self.todos.get(id)
    }

    pub fn todo_mut(&mut self, id: TodoId) -> Result<&mut Todo> {
        self.todos.record_mut(id)
    }

    pub fn todos(&self, list: TodoListId) -> Result<Vec<&Entry<Todo>>> {
        self.todos.children(list)
    }

    pub fn move_todo(&mut self, id: TodoId, list: TodoListId, position: usize) -> Result<&Entry<Todo>> {
        self.todos.move_to(id, list, position)
    }

    pub fn delete_todo(&mut self, id: TodoId) -> Result<Entry<Todo>> {
        self.todos.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_lifecycle() {
        let mut book = TodoBook::new();
        let groceries = book.add_list(TodoList::new("Groceries"));
        let milk = book.add_todo(groceries, Todo::new("milk")).unwrap().id;
        book.add_todo(groceries, Todo::new("eggs")).unwrap();

        book.todo_mut(milk).unwrap().done = true;
        book.move_todo(milk, groceries, 1).unwrap();

        let items: Vec<_> = book
            .todos(groceries)
            .unwrap()
            .iter()
            .map(|t| (t.record.title.as_str(), t.record.done, t.position))
            .collect();
        assert_eq!(items, vec![("eggs", false, 0), ("milk", true, 1)]);
    }

    #[test]
    fn test_delete_list_cascades() {
        let mut book = TodoBook::new();
        let a = book.add_list(TodoList::new("a"));
        let b = book.add_list(TodoList::new("b"));
        let x = book.add_todo(a, Todo::new("x")).unwrap().id;
        book.add_todo(a, Todo::new("y")).unwrap();
        book.add_todo(b, Todo::new("z")).unwrap();

        assert_eq!(book.delete_list(a).unwrap(), 2);
        assert!(book.todo(x).unwrap_err().is_not_found());
        assert!(book.todos(a).unwrap_err().is_not_found());
        assert_eq!(book.lists().len(), 1);
        assert!(book.delete_list(a).unwrap_err().is_not_found());
    }
}
