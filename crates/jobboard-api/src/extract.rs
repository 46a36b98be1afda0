use axum::extract::{FromRequest, FromRequestParts, Query};

use crate::error::ApiError;

/// `Json` whose rejections surface as 422 JSON errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
