use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobboardError {
    #[error("job not found: {0}")]
    JobNotFound(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("internal error: {0}")]
    InternalError(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl JobboardError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::JobNotFound(_) => "JobNotFound",
            Self::Validation(_) => "ValidationError",
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::InternalError(_) => "InternalError",
            Self::Io(_) => "InternalError",
        }
    }

    /// Message safe to hand back to API clients.
    pub fn client_detail(&self) -> String {
        match self {
            Self::JobNotFound(_) => "Job not found".to_string(),
            Self::Validation(detail) | Self::InvalidArgument(detail) => detail.clone(),
            Self::InternalError(_) | Self::Io(_) => "Internal server error".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JobboardError>;
