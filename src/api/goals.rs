use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::api::error::ApiResult;
use crate::api::json::ApiJson;
use crate::infrastructure::AppState;
use crate::infrastructure::auth::AuthUser;
use crate::models::goal::{self, GoalDto};
use crate::services::goal_service;

#[derive(Deserialize, ToSchema)]
pub struct UpdateGoalRequest {
    pub current_value: f64,
}

pub async fn list_goals(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Value>> {
    let goals = goal_service::list_goals(state.db(), auth.user_id).await?;
    Ok(Json(json!({ "goals": goals })))
}

pub async fn add_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<GoalDto>,
) -> ApiResult<(StatusCode, Json<goal::Model>)> {
    let goal = goal_service::create_goal(state.db(), auth.user_id, payload, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

#[utoipa::path(
    post,
    path = "/update-goal/{id}",
    params(("id" = i32, Path, description = "Goal id")),
    request_body = UpdateGoalRequest,
    responses(
        (status = 200, description = "`{success, is_completed, points_awarded}`"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "No such goal for this user")
    )
)]
pub async fn update_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateGoalRequest>,
) -> ApiResult<Json<Value>> {
    let update = goal_service::update_goal(
        state.db(),
        auth.user_id,
        id,
        payload.current_value,
        Utc::now(),
    )
    .await?;

    Ok(Json(json!({
        "success": true,
        "is_completed": update.goal.is_completed,
        "just_completed": update.just_completed,
        "points_awarded": update.points_awarded,
    })))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Value>> {
    goal_service::delete_goal(state.db(), auth.user_id, id).await?;
    Ok(Json(json!({ "success": true })))
}
