//! The JSON envelope every endpoint answers with.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Sent when the real body could not be serialized.
const FALLBACK_BODY: &str = r#"{"status":"error","message":"internal server error"}"#;

/// `{status, message?, data?}` plus the HTTP status it is sent with.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T = ()> {
    #[serde(skip)]
    code: StatusCode,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(code: StatusCode, data: T) -> Self {
        Self {
            code,
            status: STATUS_SUCCESS,
            message: None,
            data: Some(data),
        }
    }
}

impl ApiResponse {
    /// Success without a payload, e.g. "Note Updated"
    pub fn message(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            status: STATUS_SUCCESS,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            status: STATUS_ERROR,
            message: Some(message.into()),
            data: None,
        }
    }
}

fn json_response(code: StatusCode, body: impl Into<axum::body::Body>) -> Response {
    let mut response = Response::new(body.into());
    *response.status_mut() = code;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => json_response(self.code, body),
            Err(e) => {
                error!(error = %e, status = %self.code, "failed to encode response body");
                json_response(StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_BODY)
            }
        }
    }
}
