use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use http::StatusCode;
use jobboard_common::error::JobboardError;
use tracing::error;

pub struct ApiError(pub JobboardError);

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            JobboardError::JobNotFound(_) => StatusCode::NOT_FOUND,
            JobboardError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            JobboardError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            JobboardError::InternalError(_) | JobboardError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }

        (
            status,
            Json(serde_json::json!({
                "code": self.0.error_code(),
                "detail": self.0.client_detail(),
            })),
        )
            .into_response()
    }
}

impl From<JobboardError> for ApiError {
    fn from(err: JobboardError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(JobboardError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(JobboardError::InvalidArgument(rejection.body_text()))
    }
}
