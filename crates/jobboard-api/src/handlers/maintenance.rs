use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequest, Path, Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use jobboard_common::types::JobUpdate;
use jobboard_storage::JobCollection;

use crate::{
    error::ApiResult, extract::ApiJson, handlers::jobs, maintenance, service::JobService,
    types::MessageResponse,
};

/// Last path segment of the seed route.
pub const SEED_SEGMENT: &str = "seed";

pub async fn seed_jobs(
    State(collection): State<Arc<dyn JobCollection>>,
) -> ApiResult<Json<MessageResponse>> {
    let inserted = maintenance::seed(collection.as_ref()).await?;
    Ok(Json(MessageResponse::new(format!(
        "Successfully seeded {inserted} jobs"
    ))))
}

/// Non-POST requests to the seed path address a job whose id is `seed`.
pub async fn seed_path_as_job_id(
    State(collection): State<Arc<dyn JobCollection>>,
    request: Request,
) -> Response {
    let service = State(JobService::new(collection));
    let job_id = || Path(SEED_SEGMENT.to_string());

    match request.method().clone() {
        Method::GET => jobs::get_job(service, job_id()).await.into_response(),
        Method::DELETE => jobs::delete_job(service, job_id()).await.into_response(),
        Method::PUT => match ApiJson::<JobUpdate>::from_request(request, &()).await {
            Ok(update) => jobs::update_job(service, job_id(), update)
                .await
                .into_response(),
            Err(err) => err.into_response(),
        },
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}
