use crate::domain;
use crate::domain::todo::{NewTodo, Todo, UpdateTodo};
use anyhow::{Context, Error};
use chrono::{DateTime, Utc};
use std::sync::RwLock;

/// Process-local todo storage. Owns the ordered todo collection and the ID counter; nothing
/// survives a restart.
pub struct InMemoryTodoStore {
    collection: RwLock<TodoCollection>,
}

struct TodoCollection {
    /// Kept in creation order
    todos: Vec<Todo>,
    /// Highest ID ever handed out. Never decreases, so deleted IDs are not reused.
    last_assigned_id: i64,
}

impl TodoCollection {
    fn position_of(&self, todo_id: i64) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == todo_id)
    }

    fn find_mut(&mut self, todo_id: i64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }
}

impl InMemoryTodoStore {
    pub fn new() -> InMemoryTodoStore {
        InMemoryTodoStore {
            collection: RwLock::new(TodoCollection {
                todos: Vec::new(),
                last_assigned_id: 0,
            }),
        }
    }

    /// Builds a store pre-populated with [todos], numbered from 1 in the given order
    #[cfg(test)]
    pub fn new_with_todos(todos: &[NewTodo]) -> InMemoryTodoStore {
        let created_at = Utc::now();
        InMemoryTodoStore {
            collection: RwLock::new(TodoCollection {
                todos: todos
                    .iter()
                    .enumerate()
                    .map(|(index, new_todo)| todo_from_create(index as i64 + 1, new_todo, created_at))
                    .collect(),
                last_assigned_id: todos.len() as i64,
            }),
        }
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

fn todo_from_create(todo_id: i64, new_todo: &NewTodo, created_at: DateTime<Utc>) -> Todo {
    Todo {
        id: todo_id,
        title: new_todo.title.clone(),
        description: new_todo.description.clone(),
        completed: false,
        created_at,
    }
}

impl domain::todo::driven_ports::TodoReader for InMemoryTodoStore {
    async fn all_todos(&self) -> Result<Vec<Todo>, Error> {
        let collection = self.collection.read().map_err(super::poisoned)?;

        Ok(collection.todos.clone())
    }

    async fn todo_by_id(&self, todo_id: i64) -> Result<Option<Todo>, Error> {
        let collection = self.collection.read().map_err(super::poisoned)?;

        let todo = collection
            .todos
            .iter()
            .find(|todo| todo.id == todo_id)
            .cloned();
        Ok(todo)
    }
}

impl domain::todo::driven_ports::TodoWriter for InMemoryTodoStore {
    async fn create_todo(
        &self,
        new_todo: &NewTodo,
        created_at: DateTime<Utc>,
    ) -> Result<Todo, Error> {
        let mut collection = self.collection.write().map_err(super::poisoned)?;

        let todo_id = collection
            .last_assigned_id
            .checked_add(1)
            .context("every todo ID has already been assigned")?;
        let todo = todo_from_create(todo_id, new_todo, created_at);

        collection.last_assigned_id = todo_id;
        collection.todos.push(todo.clone());
        Ok(todo)
    }

    async fn update_todo(&self, todo_id: i64, update: &UpdateTodo) -> Result<Option<Todo>, Error> {
        let mut collection = self.collection.write().map_err(super::poisoned)?;

        let updated_todo = collection.find_mut(todo_id).map(|todo| {
            todo.title = update.title.clone();
            todo.description = update.description.clone();
            todo.clone()
        });
        Ok(updated_todo)
    }

    async fn toggle_todo(&self, todo_id: i64) -> Result<Option<Todo>, Error> {
        let mut collection = self.collection.write().map_err(super::poisoned)?;

        let toggled_todo = collection.find_mut(todo_id).map(|todo| {
            todo.completed = !todo.completed;
            todo.clone()
        });
        Ok(toggled_todo)
    }

    async fn delete_todo(&self, todo_id: i64) -> Result<Option<Todo>, Error> {
        let mut collection = self.collection.write().map_err(super::poisoned)?;

        let deleted_todo = collection
            .position_of(todo_id)
            .map(|index| collection.todos.remove(index));
        Ok(deleted_todo)
    }
}
