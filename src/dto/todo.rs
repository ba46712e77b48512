use crate::domain;
use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// DTO for creating a new todo via the API
#[derive(Deserialize, Display, ToSchema)]
#[display("{title}")]
#[cfg_attr(test, derive(Serialize))]
pub struct NewTodo {
    #[schema(example = "Buy groceries")]
    pub title: String,
    #[schema(example = "Milk, eggs and bread")]
    pub description: Option<String>,
}

impl From<NewTodo> for domain::todo::NewTodo {
    fn from(value: NewTodo) -> Self {
        domain::todo::NewTodo {
            title: value.title,
            description: value.description,
        }
    }
}

/// DTO for replacing a todo's title and description via the API. Leaving out the description
/// clears it.
#[derive(Deserialize, Display, ToSchema)]
#[display("{title}")]
#[cfg_attr(test, derive(Serialize))]
pub struct UpdateTodo {
    #[schema(example = "Buy groceries")]
    pub title: String,
    #[schema(example = "Oat milk instead")]
    pub description: Option<String>,
}

impl From<UpdateTodo> for domain::todo::UpdateTodo {
    fn from(value: UpdateTodo) -> Self {
        domain::todo::UpdateTodo {
            title: value.title,
            description: value.description,
        }
    }
}

/// DTO for a returned todo on the API
#[derive(Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize, PartialEq, Eq, Debug))]
pub struct Todo {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Buy groceries")]
    pub title: String,
    #[schema(example = "Milk, eggs and bread")]
    pub description: Option<String>,
    #[schema(example = false)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<domain::todo::Todo> for Todo {
    fn from(value: domain::todo::Todo) -> Self {
        Todo {
            id: value.id,
            title: value.title,
            description: value.description,
            completed: value.completed,
            created_at: value.created_at,
        }
    }
}

/// DTO confirming that a todo was removed
#[derive(Serialize, ToSchema)]
pub struct DeletedTodo {
    #[schema(example = "Todo deleted successfully")]
    pub message: String,
}

impl DeletedTodo {
    pub fn confirmation() -> Self {
        DeletedTodo {
            message: "Todo deleted successfully".to_owned(),
        }
    }
}
