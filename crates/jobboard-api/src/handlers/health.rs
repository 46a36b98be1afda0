use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::warn;

use crate::service::JobService;

pub async fn health_live() -> impl IntoResponse {
    StatusCode::OK
}

pub async fn health_ready(State(service): State<JobService>) -> impl IntoResponse {
    match service.collection().ping().await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            warn!(error = %err, "job collection is not reachable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
