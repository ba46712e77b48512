//! Records exchanged with API clients, along with their OpenAPI schemas

pub mod health;
pub mod todo;
