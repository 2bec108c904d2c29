//! Todo entity, domain errors, and the storage contract.
//!
//! # Design
//! This module sits at the bottom of the dependency graph: the use case and
//! the storage backends both depend on it, it depends on neither. Any backend
//! that implements `TodoRepository` can be swapped in without touching the
//! use case or the HTTP layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Identifier assigned by a repository. Positive, never reused.
pub type TodoId = i64;

/// A stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
}

/// A todo that has not been stored yet and therefore carries no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Attach a repository-assigned id, producing the stored form.
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
        }
    }
}

/// Failures produced below the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    /// Input violates a domain rule (currently: empty title).
    #[error("{0}")]
    Validation(String),

    /// The backing store could not be read or written. The in-memory
    /// backend never produces this.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Storage contract for todos.
///
/// Implementations own the backing collection and the id counter. `create`
/// must reject an empty title without mutating anything, and must hand out
/// ids 1, 2, 3, ... to successful creations only.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Validate and store `todo`, returning it with its assigned id.
    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError>;

    /// Every stored todo, in insertion order.
    async fn get_all(&self) -> Result<Vec<Todo>, TodoError>;
}
