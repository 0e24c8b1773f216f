use crate::models::ErrorResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;
use wikirace_core::SearchError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Search(search_error) if search_error.is_invalid_input() => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Search(search_error) => {
                error!(error = %search_error, "Search failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
