//! In-memory `TodoRepository` backend.
//!
//! # Design
//! The todo list and the id counter live together behind one
//! `tokio::sync::RwLock`. `create` holds the write lock across
//! assign-and-append so two concurrent creations can never observe the same
//! counter value; `get_all` takes the read lock and clones a snapshot.
//! Nothing is persisted; state lives as long as the repository value.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{NewTodo, Todo, TodoError, TodoId, TodoRepository};

#[derive(Debug)]
struct Store {
    todos: Vec<Todo>,
    next_id: TodoId,
}

/// Append-only, process-lifetime todo storage.
#[derive(Debug)]
pub struct InMemoryTodoRepository {
    store: RwLock<Store>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError> {
        if todo.title.is_empty() {
            return Err(TodoError::Validation("title is empty".to_string()));
        }

        let mut store = self.store.write().await;
        let todo = todo.into_todo(store.next_id);
        store.next_id += 1;
        store.todos.push(todo.clone());
        Ok(todo)
    }

    async fn get_all(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.store.read().await.todos.clone())
    }
}
