//! Driven adapters which hold the service's data

pub mod in_memory_todo_driven_ports;

pub use in_memory_todo_driven_ports::InMemoryTodoStore;

use anyhow::anyhow;
use std::sync::PoisonError;

/// Converts a poisoned lock into an [anyhow::Error]. The [PoisonError] holds a lock guard, so it
/// can't be wrapped as-is.
fn poisoned<Guard>(_: PoisonError<Guard>) -> anyhow::Error {
    anyhow!("todo storage lock was poisoned by a panicking request")
}
