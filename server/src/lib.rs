//! HTTP service for creating and listing todos.
//!
//! # Overview
//! Three layers, each behind a trait so it can be replaced on its own:
//! `handler` (axum) → `usecase::TodoUseCase` → `domain::TodoRepository`.
//! `repository::InMemoryTodoRepository` is the only storage backend.
//!
//! # Design
//! - Dependencies point downwards only; `domain` imports nothing from the
//!   other layers.
//! - `app()` does the wiring in dependency order and returns a ready
//!   `Router`; `run()` serves it on a bound listener.

pub mod config;
pub mod domain;
pub mod handler;
pub mod repository;
pub mod router;
pub mod telemetry;
pub mod usecase;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub use domain::{NewTodo, Todo, TodoError, TodoId, TodoRepository};
pub use handler::{ApiError, ErrorBody, TodoHandler};
pub use repository::InMemoryTodoRepository;
pub use usecase::{TodoService, TodoUseCase};

/// Router backed by a fresh in-memory repository.
pub fn app() -> Router {
    let repo = Arc::new(InMemoryTodoRepository::new());
    let usecase = Arc::new(TodoService::new(repo));
    let handler = TodoHandler::new(usecase);
    router::router(handler)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
