use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::TodoError;
use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::debug;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
#[cfg_attr(test, derive(Clone, PartialEq, Eq))]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug)]
#[cfg_attr(test, derive(Clone, PartialEq, Eq))]
pub struct UpdateTodo {
    pub title: String,
    pub description: Option<String>,
}

pub mod driven_ports {
    use super::*;

    pub trait TodoReader {
        /// Every todo in creation order
        async fn all_todos(&self) -> Result<Vec<Todo>, anyhow::Error>;
        async fn todo_by_id(&self, todo_id: i64) -> Result<Option<Todo>, anyhow::Error>;
    }

    /// Mutations on stored todos. Calls addressing a todo by ID produce `None` when no todo
    /// has that ID.
    pub trait TodoWriter {
        /// Stores a new todo under the next unused ID
        async fn create_todo(
            &self,
            new_todo: &NewTodo,
            created_at: DateTime<Utc>,
        ) -> Result<Todo, anyhow::Error>;

        async fn update_todo(
            &self,
            todo_id: i64,
            update: &UpdateTodo,
        ) -> Result<Option<Todo>, anyhow::Error>;

        async fn toggle_todo(&self, todo_id: i64) -> Result<Option<Todo>, anyhow::Error>;

        /// Removes a todo, handing back the removed record
        async fn delete_todo(&self, todo_id: i64) -> Result<Option<Todo>, anyhow::Error>;
    }
}

pub mod driving_ports {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum TodoError {
        #[error("todo {0} does not exist")]
        NotFound(i64),
        #[error(transparent)]
        PortError(#[from] anyhow::Error),
    }


    pub trait TodoPort {
        async fn list_todos(&self, todo_read: &impl TodoReader) -> Result<Vec<Todo>, TodoError>;
        async fn todo_by_id(
            &self,
            todo_id: i64,
            todo_read: &impl TodoReader,
        ) -> Result<Todo, TodoError>;
        async fn create_todo(
            &self,
            new_todo: &NewTodo,
            todo_write: &impl TodoWriter,
        ) -> Result<Todo, TodoError>;
        async fn update_todo(
            &self,
            todo_id: i64,
            update: &UpdateTodo,
            todo_write: &impl TodoWriter,
        ) -> Result<Todo, TodoError>;
        async fn toggle_todo(
            &self,
            todo_id: i64,
            todo_write: &impl TodoWriter,
        ) -> Result<Todo, TodoError>;
        async fn delete_todo(
            &self,
            todo_id: i64,
            todo_write: &impl TodoWriter,
        ) -> Result<(), TodoError>;
    }
}

pub struct TodoService {}

impl driving_ports::TodoPort for TodoService {
    async fn list_todos(&self, todo_read: &impl TodoReader) -> Result<Vec<Todo>, TodoError> {
        let todos = todo_read.all_todos().await.context("listing todos")?;
        Ok(todos)
    }

    async fn todo_by_id(&self, todo_id: i64, todo_read: &impl TodoReader) -> Result<Todo, TodoError> {
        todo_read
            .todo_by_id(todo_id)
            .await
            .context("fetching a todo by ID")?
            .ok_or(TodoError::NotFound(todo_id))
    }

    async fn create_todo(
        &self,
        new_todo: &NewTodo,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, TodoError> {
        let created_todo = todo_write
            .create_todo(new_todo, Utc::now())
            .await
            .context("creating a todo")?;
        Ok(created_todo)
    }

    async fn update_todo(
        &self,
        todo_id: i64,
        update: &UpdateTodo,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, TodoError> {
        todo_write
            .update_todo(todo_id, update)
            .await
            .context("updating a todo")?
            .ok_or(TodoError::NotFound(todo_id))
    }

    async fn toggle_todo(&self, todo_id: i64, todo_write: &impl TodoWriter) -> Result<Todo, TodoError> {
        todo_write
            .toggle_todo(todo_id)
            .await
            .context("toggling a todo's completion")?
            .ok_or(TodoError::NotFound(todo_id))
    }

    async fn delete_todo(&self, todo_id: i64, todo_write: &impl TodoWriter) -> Result<(), TodoError> {
        let deleted_todo = todo_write
            .delete_todo(todo_id)
            .await
            .context("deleting a todo")?
            .ok_or(TodoError::NotFound(todo_id))?;

        debug!(todo_id, title = %deleted_todo.title, "removed todo");
        Ok(())
    }
}
