use axum::{middleware, routing::get, Router};

use crate::handler::TodoHandler;
use crate::telemetry::request_tracing;

/// Route table for the todo API.
pub fn router(handler: TodoHandler) -> Router {
    Router::new()
        .route("/api/todos", get(TodoHandler::list).post(TodoHandler::create))
        .layer(middleware::from_fn(request_tracing))
        .with_state(handler)
}
