//! Error types for the todo API client.

/// Errors returned by `TodoClient`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an unexpected status. `message` is the
    /// `error` field of the JSON body when present, otherwise the raw body.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
