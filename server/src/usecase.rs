//! Application layer between the HTTP handler and storage.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewTodo, Todo, TodoError, TodoRepository};

/// Operations the transport layer may invoke.
#[async_trait]
pub trait TodoUseCase: Send + Sync {
    async fn create_todo(&self, title: String) -> Result<Todo, TodoError>;

    async fn list_todos(&self) -> Result<Vec<Todo>, TodoError>;
}

/// `TodoUseCase` backed by any `TodoRepository`.
///
/// Validation belongs to the repository; errors pass through untouched.
#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl TodoUseCase for TodoService {
    async fn create_todo(&self, title: String) -> Result<Todo, TodoError> {
        self.repo.create(NewTodo::new(title)).await
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.repo.get_all().await
    }
}
