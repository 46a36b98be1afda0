use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use jobboard_api::{ApiConfig, app_router};
use jobboard_storage::{JobCollection, MemoryCollection};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    app_with(ApiConfig::default())
}

fn app_with(config: ApiConfig) -> Router {
    let collection: Arc<dyn JobCollection> = Arc::new(MemoryCollection::new());
    app_router(collection, &config).unwrap()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn new_job() -> Value {
    json!({
        "title": "X",
        "company": "Y",
        "location": "Z",
        "status": "Active",
        "jobType": "Full-time",
        "salary": "$1",
        "description": "d"
    })
}

#[tokio::test]
async fn root_reports_service_name() {
    let app = app();
    for uri in ["/api", "/api/"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Job Management API");
    }
}

#[tokio::test]
async fn job_lifecycle_over_http() {
    let app = app();

    let (status, created) = send(&app, Method::POST, "/api/jobs", Some(new_job())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["applicants"], 0);
    assert!(created["experience"].is_null());
    assert!(created["deadline"].is_null());
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let (status, fetched) = send(&app, Method::GET, &format!("/api/jobs/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/jobs/{id}"),
        Some(json!({ "applicants": 5, "id": "other", "title": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let mut expected = created.clone();
    expected["applicants"] = json!(5);
    assert_eq!(updated, expected);

    let (status, deleted) = send(&app, Method::DELETE, &format!("/api/jobs/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Job deleted successfully");

    let (status, missing) = send(&app, Method::GET, &format!("/api/jobs/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["detail"], "Job not found");
}

#[tokio::test]
async fn unknown_ids_return_404() {
    let app = app();
    let uri = "/api/jobs/does-not-exist";

    let (status, _) = send(&app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::PUT, uri, Some(json!({ "title": "T" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::PUT, uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = send(&app, Method::DELETE, uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "JobNotFound");
}

#[tokio::test]
async fn invalid_create_bodies_return_422() {
    let app = app();

    let mut missing_title = new_job();
    missing_title.as_object_mut().unwrap().remove("title");
    let (status, body) = send(&app, Method::POST, "/api/jobs", Some(missing_title)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "ValidationError");
    assert!(body["detail"].as_str().unwrap().contains("title"));

    let mut wrong_type = new_job();
    wrong_type["applicants"] = json!("many");
    let (status, _) = send(&app, Method::POST, "/api/jobs", Some(wrong_type)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::GET, "/api/jobs", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn list_filters_compose() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/jobs/seed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully seeded 10 jobs");

    let (_, all) = send(&app, Method::GET, "/api/jobs", None).await;
    assert_eq!(all.as_array().unwrap().len(), 10);

    let (_, contract) = send(
        &app,
        Method::GET,
        "/api/jobs?status=Active&jobType=Contract",
        None,
    )
    .await;
    let contract = contract.as_array().unwrap();
    assert_eq!(contract.len(), 1);
    assert_eq!(contract[0]["title"], "Mobile App Developer");

    let (_, lower) = send(&app, Method::GET, "/api/jobs?search=python", None).await;
    let (_, upper) = send(&app, Method::GET, "/api/jobs?search=PYTHON", None).await;
    assert_eq!(lower, upper);
    assert_eq!(lower.as_array().unwrap().len(), 1);

    let (_, new_york) = send(
        &app,
        Method::GET,
        "/api/jobs?location=New%20York,%20NY&search=manager",
        None,
    )
    .await;
    let new_york = new_york.as_array().unwrap();
    assert_eq!(new_york.len(), 1);
    assert_eq!(new_york[0]["company"], "Innovation Hub");
}

#[tokio::test]
async fn repeated_query_keys_use_last_value() {
    let app = app();
    send(&app, Method::POST, "/api/jobs/seed", None).await;

    let (status, jobs) = send(
        &app,
        Method::GET,
        "/api/jobs?status=Closed&status=Active&jobType=Contract&page=2",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let jobs = jobs.as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["title"], "Mobile App Developer");
}

#[tokio::test]
async fn seed_path_with_other_methods_is_a_job_id() {
    let app = app();
    let uri = "/api/jobs/seed";

    let (status, body) = send(&app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Job not found");
    let (status, _) = send(&app, Method::PUT, uri, Some(json!({ "title": "T" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::PUT, uri, Some(json!({ "applicants": "many" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (status, body) = send(&app, Method::DELETE, uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "JobNotFound");
}

#[tokio::test]
async fn reseeding_resets_the_collection() {
    let app = app();
    send(&app, Method::POST, "/api/jobs", Some(new_job())).await;
    send(&app, Method::POST, "/api/jobs/seed", None).await;
    let (_, body) = send(&app, Method::POST, "/api/jobs/seed", None).await;
    assert_eq!(body["message"], "Successfully seeded 10 jobs");

    let (_, all) = send(&app, Method::GET, "/api/jobs?search=X", None).await;
    assert!(all
        .as_array()
        .unwrap()
        .iter()
        .all(|job| job["title"] != "X"));
}

#[tokio::test]
async fn maintenance_routes_can_be_disabled() {
    let app = app_with(ApiConfig {
        maintenance_routes: false,
        ..ApiConfig::default()
    });
    let (status, _) = send(&app, Method::POST, "/api/jobs/seed", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn custom_base_path_and_probes() {
    let app = app_with(ApiConfig {
        base_path: "/v2/".to_string(),
        ..ApiConfig::default()
    });
    let (status, _) = send(&app, Method::GET, "/v2/jobs", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/api/jobs", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/health/live", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let app = app_with(ApiConfig {
        cors_origins: vec!["http://localhost:3000".to_string()],
        ..ApiConfig::default()
    });
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/jobs")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}
