use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::error::ApiResult;
use crate::api::json::ApiJson;
use crate::infrastructure::AppState;
use crate::infrastructure::auth::AuthUser;
use crate::models::custom_workout::{self, CustomWorkoutDto};
use crate::services::custom_workout_service;
use crate::services::workout_service::{self, CompleteWorkoutInput, WorkoutOutcome};

const DEFAULT_HISTORY_LIMIT: u64 = 50;
const MAX_HISTORY_LIMIT: u64 = 500;

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn limit_or(&self, default: u64, max: u64) -> u64 {
        self.limit.unwrap_or(default).clamp(1, max)
    }
}

#[utoipa::path(
    post,
    path = "/complete-workout",
    request_body = CompleteWorkoutInput,
    responses(
        (status = 201, description = "Workout logged; points, streak and challenges updated"),
        (status = 400, description = "Missing or invalid field"),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn complete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<CompleteWorkoutInput>,
) -> ApiResult<(StatusCode, Json<WorkoutOutcome>)> {
    let outcome =
        workout_service::complete_workout(state.db(), auth.user_id, payload, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

pub async fn list_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    let limit = query.limit_or(DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT);
    let workouts = workout_service::list_history(state.db(), auth.user_id, limit).await?;
    Ok(Json(json!({ "workouts": workouts })))
}

pub async fn list_custom_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Value>> {
    let workouts = custom_workout_service::list_custom_workouts(state.db(), auth.user_id).await?;
    Ok(Json(json!({ "custom_workouts": workouts })))
}

pub async fn create_custom_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<CustomWorkoutDto>,
) -> ApiResult<(StatusCode, Json<custom_workout::Model>)> {
    let saved = custom_workout_service::create_custom_workout(
        state.db(),
        auth.user_id,
        payload,
        Utc::now(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn delete_custom_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Value>> {
    custom_workout_service::delete_custom_workout(state.db(), auth.user_id, id).await?;
    Ok(Json(json!({ "success": true })))
}
