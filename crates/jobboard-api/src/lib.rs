pub mod error;
pub mod extract;
pub mod handlers;
pub mod maintenance;
pub mod router;
pub mod service;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use router::{ApiConfig, app_router};
pub use service::JobService;
