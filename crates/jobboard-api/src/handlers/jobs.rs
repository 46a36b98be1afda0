use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use jobboard_common::types::{Job, JobCreate, JobFilter, JobUpdate};

use crate::{
    error::ApiResult,
    extract::{ApiJson, ApiQuery},
    service::JobService,
    types::MessageResponse,
};

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Job Management API"))
}

pub async fn create_job(
    State(service): State<JobService>,
    ApiJson(input): ApiJson<JobCreate>,
) -> ApiResult<(StatusCode, Json<Job>)> {
    let job = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn list_jobs(
    State(service): State<JobService>,
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Job>>> {
    let filter: JobFilter = pairs.into_iter().collect();
    Ok(Json(service.list(&filter).await?))
}

pub async fn get_job(
    State(service): State<JobService>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<Job>> {
    Ok(Json(service.get(&job_id).await?))
}

pub async fn update_job(
    State(service): State<JobService>,
    Path(job_id): Path<String>,
    ApiJson(update): ApiJson<JobUpdate>,
) -> ApiResult<Json<Job>> {
    Ok(Json(service.update(&job_id, update).await?))
}

pub async fn delete_job(
    State(service): State<JobService>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    service.delete(&job_id).await?;
    Ok(Json(MessageResponse::new("Job deleted successfully")))
}
