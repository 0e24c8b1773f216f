use crate::error::ApiError;
use crate::models::{HealthResponse, SolveForm, SolveResponse};
use crate::state::AppState;
use axum::{Form, Json, extract::State};
use std::sync::Arc;
use tracing::info;
use wikirace_core::LinkSource;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Wikirace API is running".to_string(),
    })
}

pub async fn solve<S: LinkSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Form(params): Form<SolveForm>,
) -> Result<Json<SolveResponse>, ApiError> {
    info!(
        start = %params.start,
        end = %params.end,
        algorithm = %params.algo,
        "Received solve request"
    );

    let result = state
        .solver
        .solve(&params.start, &params.end, &params.algo)
        .await?;

    Ok(Json(SolveResponse::from(&result)))
}
