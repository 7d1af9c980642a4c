//! Gamebook — API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gamebook_render::RenderError;
use gamebook_story::DecodeError;
use thiserror::Error;
use uuid::Uuid;

/// Body of the not-found response.
pub const NOT_FOUND_MESSAGE: &str = "Chapter not found.";

/// Body of the internal-error response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong...";

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The story could not be loaded.
    #[error("story error: {0}")]
    Story(#[from] DecodeError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Failure to serve a chapter.
///
/// Only two responses reach the client: not found and a generic internal
/// error. The render error itself is never sent.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No chapter is stored under the derived key.
    #[error("chapter not found: {0}")]
    ChapterNotFound(String),

    /// The chapter exists but the template failed to render it.
    #[error("failed to render chapter {key} (correlation id {correlation_id}): {source}")]
    Render {
        /// Key of the chapter being rendered.
        key: String,
        /// Identifies the failure in the logs.
        correlation_id: Uuid,
        /// The underlying template failure.
        source: RenderError,
    },
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        match self {
            Self::ChapterNotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
            Self::Render { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}
