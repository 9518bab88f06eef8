use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::error::ApiError;
use super::response::ApiResponse;
use crate::entity::{Note, NoteDraft};
use crate::service::NoteService;

/// Shared application dependencies.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteService>,
}

type ApiResult<T = ()> = Result<ApiResponse<T>, ApiError>;

/// Run a service call on the blocking pool; the store does synchronous I/O.
async fn run_blocking<T, F>(state: &AppState, call: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&dyn NoteService) -> crate::Result<T> + Send + 'static,
{
    let notes = Arc::clone(&state.notes);
    Ok(tokio::task::spawn_blocking(move || call(notes.as_ref())).await??)
}

type IdParam = Result<Path<String>, PathRejection>;
type RawBody = Result<Bytes, BytesRejection>;

fn parse_id(param: IdParam) -> Result<i64, ApiError> {
    let Path(raw) = param?;
    raw.parse().map_err(|_| ApiError::InvalidPathId { raw })
}

/// `null` decodes to `None` and is rejected by the service as a missing note.
fn decode_note(body: RawBody) -> Result<Option<NoteDraft>, ApiError> {
    Ok(serde_json::from_slice(&body?)?)
}

/// GET /api/v1/notes/{id}
pub async fn get_note(State(state): State<AppState>, id: IdParam) -> ApiResult<Note> {
    let id = parse_id(id)?;
    let note = run_blocking(&state, move |notes| notes.get_note(id)).await?;
    Ok(ApiResponse::success(StatusCode::OK, note))
}

/// POST /api/v1/notes
pub async fn create_note(State(state): State<AppState>, body: RawBody) -> ApiResult<i64> {
    let draft = decode_note(body)?;
    let id = run_blocking(&state, move |notes| notes.create_note(draft.as_ref())).await?;
    Ok(ApiResponse::success(StatusCode::CREATED, id))
}

/// GET /api/v1/notes
pub async fn get_all_notes(State(state): State<AppState>) -> ApiResult<Vec<Note>> {
    let notes = run_blocking(&state, |notes| notes.get_all_notes()).await?;
    Ok(ApiResponse::success(StatusCode::OK, notes))
}

/// PUT /api/v1/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    id: IdParam,
    body: RawBody,
) -> ApiResult {
    let id = parse_id(id)?;
    let draft = decode_note(body)?;
    run_blocking(&state, move |notes| notes.update_note(id, draft.as_ref())).await?;
    Ok(ApiResponse::message(StatusCode::OK, "Note Updated"))
}

/// DELETE /api/v1/notes/{id}
///
/// Answers 200 with an envelope rather than an empty 204, so every response
/// carries a body.
pub async fn delete_note(State(state): State<AppState>, id: IdParam) -> ApiResult {
    let id = parse_id(id)?;
    run_blocking(&state, move |notes| notes.delete_note(id)).await?;
    Ok(ApiResponse::message(StatusCode::OK, "Note Deleted"))
}
