use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use http::HeaderValue;
use jobboard_common::error::{JobboardError, Result};
use jobboard_storage::JobCollection;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, service::JobService};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Route prefix such as `/api`; empty mounts at the root.
    pub base_path: String,
    /// Allowed CORS origins. Empty or containing `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Mount `POST {base}/jobs/seed`.
    pub maintenance_routes: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: "/api".to_string(),
            cors_origins: Vec::new(),
            maintenance_routes: true,
        }
    }
}

pub fn app_router(collection: Arc<dyn JobCollection>, config: &ApiConfig) -> Result<Router> {
    let base_path = normalize_base_path(&config.base_path)?;
    let service = JobService::new(Arc::clone(&collection));

    let mut app = jobs_router(service.clone(), &base_path).merge(health_router(service));
    if config.maintenance_routes {
        app = app.merge(maintenance_router(collection, &base_path));
    }

    Ok(app
        .layer(cors_layer(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http()))
}

pub fn jobs_router(service: JobService, base_path: &str) -> Router {
    let mut router = Router::new();
    if base_path.is_empty() {
        router = router.route("/", get(handlers::jobs::root));
    } else {
        router = router
            .route(base_path, get(handlers::jobs::root))
            .route(&format!("{base_path}/"), get(handlers::jobs::root));
    }

    router
        .route(
            &format!("{base_path}/jobs"),
            get(handlers::jobs::list_jobs).post(handlers::jobs::create_job),
        )
        .route(
            &format!("{base_path}/jobs/{{job_id}}"),
            get(handlers::jobs::get_job)
                .put(handlers::jobs::update_job)
                .delete(handlers::jobs::delete_job),
        )
        .with_state(service)
}

/// Destructive demo-data routes, mounted separately from the job API.
///
/// The static seed path shadows `{base}/jobs/{job_id}`, so every other method
/// is handed back to the job handlers with `seed` as the id.
pub fn maintenance_router(collection: Arc<dyn JobCollection>, base_path: &str) -> Router {
    Router::new()
        .route(
            &format!(
                "{base_path}/jobs/{}",
                handlers::maintenance::SEED_SEGMENT
            ),
            post(handlers::maintenance::seed_jobs)
                .fallback(handlers::maintenance::seed_path_as_job_id),
        )
        .with_state(collection)
}

pub fn health_router(service: JobService) -> Router {
    Router::new()
        .route("/health/live", get(handlers::health::health_live))
        .route("/health/ready", get(handlers::health::health_ready))
        .with_state(service)
}

pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins: Vec<&str> = origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let allowed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| {
                JobboardError::InvalidArgument(format!("invalid cors origin: {origin}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Normalizes a route prefix to `""` or `/segment[/segment...]`.
pub fn normalize_base_path(base_path: &str) -> Result<String> {
    let trimmed = base_path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    if trimmed.contains(['{', '}', '*', '?', '#', ' ']) || trimmed.contains("//") {
        return Err(JobboardError::InvalidArgument(format!(
            "invalid base path: {base_path:?}"
        )));
    }

    if trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("/{trimmed}"))
    }
}
