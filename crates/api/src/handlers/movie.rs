//! Handlers for the `/movies` resource.
//!
//! Decode the request into core arguments, call [`MovieService`], and wrap
//! the result in the response envelope. Every failure goes through
//! [`AppError`].
//!
//! [`MovieService`]: crate::services::MovieService

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::pagination::Paginated;
use cinedex_core::types::parse_id;
use cinedex_db::models::movie::{Movie, DETAIL_FIELDS, LIST_FIELDS};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::Envelope;
use crate::state::AppState;

/// Decode an optional JSON body. An empty body is treated as absent.
fn parse_body(body: &Bytes) -> AppResult<Option<Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some).map_err(|_| {
        AppError::Core(CoreError::MalformedRequest(
            "Request body must be valid JSON".to_string(),
        ))
    })
}

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Envelope<Paginated<Movie>>>> {
    // An undecodable query string paginates with the defaults.
    let params = query
        .map(|Query(pairs)| PageParams::from_pairs(pairs))
        .unwrap_or_default();
    let page = params.page_request();
    let result = state.movies.paginate(LIST_FIELDS, &page).await?;
    Ok(Json(Envelope::success("Records Fetched Successfully", result)))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Envelope<Movie>>)> {
    let payload = parse_body(&body)?;
    let movie = state.movies.create(payload.as_ref()).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::success("Movie Created Successfully", movie)),
    ))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Envelope<Movie>>> {
    let id = parse_id(&id)?;
    let movie = state.movies.get_one(DETAIL_FIELDS, id).await?;
    Ok(Json(Envelope::success("Record Fetched Successfully", movie)))
}

/// PUT/PATCH /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<Envelope<Movie>>> {
    let id = parse_id(&id)?;
    let payload = parse_body(&body)?;
    let movie = state.movies.update(payload.as_ref(), id).await?;
    Ok(Json(Envelope::success(
        "Movie record updated successfully",
        movie,
    )))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state.movies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
