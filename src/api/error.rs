//! Mapping from domain errors to HTTP status codes and client-visible text.

use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use super::response::ApiResponse;
use crate::error::{ErrorKind, NoteError};

/// Messages sent to clients. Internal error text never leaves the server.
pub mod messages {
    pub const INVALID_ID_FORMAT: &str = "id must be a valid integer";
    pub const INVALID_ID: &str = "id must be greater than 0";
    pub const INVALID_NOTE: &str = "note must have title and content";
    pub const INVALID_BODY: &str = "invalid request body";
    pub const BODY_TOO_LARGE: &str = "request body too large";
    pub const NOT_FOUND: &str = "note not found";
    pub const ROUTE_NOT_FOUND: &str = "route not found";
    pub const METHOD_NOT_ALLOWED: &str = "method not allowed";
    pub const INTERNAL: &str = "internal server error";
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("id must be a valid integer: {raw:?}")]
    InvalidPathId { raw: String },

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("request body rejected: {0}")]
    BodyRejected(#[from] BytesRejection),

    #[error(transparent)]
    Note(#[from] NoteError),

    #[error("store task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// Kind used for status mapping. A failed blocking task counts as a store failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidPathId { .. }
            | ApiError::InvalidBody(_)
            | ApiError::BodyRejected(_) => ErrorKind::Transport,
            ApiError::Note(e) => e.kind(),
            ApiError::Join(_) => ErrorKind::Store,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        if let ApiError::BodyRejected(rejection) = self {
            return rejection.status();
        }
        match self.kind() {
            ErrorKind::InvalidId | ErrorKind::InvalidNote | ErrorKind::Transport => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Store => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn client_message(&self) -> &'static str {
        match self {
            ApiError::InvalidPathId { .. } => messages::INVALID_ID_FORMAT,
            ApiError::InvalidBody(_) => messages::INVALID_BODY,
            ApiError::BodyRejected(rejection)
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                messages::BODY_TOO_LARGE
            }
            ApiError::BodyRejected(_) => messages::INVALID_BODY,
            ApiError::Note(e) => match e.kind() {
                ErrorKind::InvalidId => messages::INVALID_ID,
                ErrorKind::InvalidNote => messages::INVALID_NOTE,
                ErrorKind::NotFound => messages::NOT_FOUND,
                ErrorKind::Store | ErrorKind::Transport => messages::INTERNAL,
            },
            ApiError::Join(_) => messages::INTERNAL,
        }
    }
}

/// Covers ids that cannot even be decoded from the URL, e.g. invalid UTF-8.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPathId {
            raw: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "request rejected");
        }
        ApiResponse::error(status, self.client_message()).into_response()
    }
}
