//! HTTP surface of the notes service.
//!
//! Routes live under [`NOTES_PATH`]. Handlers decode the transport input,
//! call the [`NoteService`] and answer with an [`ApiResponse`] envelope; all
//! status-code decisions are made in [`ApiError`].

pub mod error;
pub mod handlers;
pub mod response;

use std::any::Any;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderName, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

pub use error::{messages, ApiError};
pub use handlers::AppState;
pub use response::ApiResponse;

use crate::service::NoteService;

pub const NOTES_PATH: &str = "/api/v1/notes";

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the full application: routes, state and middleware.
pub fn router(notes: Arc<dyn NoteService>) -> Router {
    let routes = Router::new()
        .route(
            NOTES_PATH,
            get(handlers::get_all_notes).post(handlers::create_note),
        )
        .route(
            "/api/v1/notes/",
            get(handlers::get_all_notes).post(handlers::create_note),
        )
        .route(
            "/api/v1/notes/{id}",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .with_state(AppState { notes });

    with_middleware(routes)
}

/// Request flow, outermost first: set request id, propagate it to the
/// response, trace, recover from panics.
fn with_middleware(router: Router) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

async fn route_not_found() -> ApiResponse {
    ApiResponse::error(StatusCode::NOT_FOUND, messages::ROUTE_NOT_FOUND)
}

async fn method_not_allowed() -> ApiResponse {
    ApiResponse::error(StatusCode::METHOD_NOT_ALLOWED, messages::METHOD_NOT_ALLOWED)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "handler panicked");
    ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL).into_response()
}
