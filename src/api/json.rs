//! JSON request bodies that fail to parse are reported like any other
//! validation error: 400 with `{"error": "..."}`.

use axum::Json;
use axum::extract::FromRequest;

use crate::api::error::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
