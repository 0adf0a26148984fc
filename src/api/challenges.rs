use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde_json::{Value, json};

use crate::api::error::ApiResult;
use crate::infrastructure::AppState;
use crate::infrastructure::auth::AuthUser;
use crate::models::user_challenge;
use crate::services::challenge_service;

pub async fn list_challenges(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Value>> {
    let challenges = challenge_service::list_for_user(state.db(), auth.user_id).await?;
    Ok(Json(json!({ "challenges": challenges })))
}

#[utoipa::path(
    post,
    path = "/join-challenge/{id}",
    params(("id" = i32, Path, description = "Catalog challenge id")),
    responses(
        (status = 201, description = "Challenge joined"),
        (status = 404, description = "Unknown challenge"),
        (status = 409, description = "Already joined")
    )
)]
pub async fn join_challenge(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<(StatusCode, Json<user_challenge::Model>)> {
    let joined = challenge_service::join(state.db(), auth.user_id, id, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(joined)))
}
