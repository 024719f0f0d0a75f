//! Fallbacks for requests no movie or health handler accepts.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Any path with no route.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// A known path called with a method it does not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Replace the bare 408 produced by the timeout layer with the failure
/// envelope. Other responses pass through untouched.
pub async fn envelope_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::Timeout.into_response();
    }
    response
}
