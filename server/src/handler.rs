//! HTTP handlers for `/api/todos`.
//!
//! # Design
//! Handlers only translate: JSON body → `TodoUseCase` call → status code and
//! JSON body. The create body is decoded as JSON whatever its
//! `Content-Type`. Body parsing failures are answered here with 400 and never
//! reach the use case. Every use-case failure, including an empty title,
//! is answered with 500; existing clients rely on that status.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Todo, TodoError};
use crate::usecase::TodoUseCase;

/// Body of `POST /api/todos`. Unknown fields are ignored; a missing or
/// `null` title reads as empty.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A failure on its way out as an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be read as a create payload.
    #[error("{0}")]
    MalformedRequest(String),

    #[error(transparent)]
    UseCase(#[from] TodoError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            // Validation failures land here too.
            ApiError::UseCase(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedRequest(format!("invalid request body: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Router state: the use case the handlers call into.
#[derive(Clone)]
pub struct TodoHandler {
    usecase: Arc<dyn TodoUseCase>,
}

impl TodoHandler {
    pub fn new(usecase: Arc<dyn TodoUseCase>) -> Self {
        Self { usecase }
    }

    /// `POST /api/todos`
    pub async fn create(
        State(handler): State<TodoHandler>,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<(StatusCode, Json<Todo>), ApiError> {
        let input: CreateTodoRequest = serde_json::from_slice(&body?)?;
        let todo = handler.usecase.create_todo(input.title).await?;
        Ok((StatusCode::CREATED, Json(todo)))
    }

    /// `GET /api/todos`
    pub async fn list(State(handler): State<TodoHandler>) -> Result<Json<Vec<Todo>>, ApiError> {
        let todos = handler.usecase.list_todos().await?;
        Ok(Json(todos))
    }
}
