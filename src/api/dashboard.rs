use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use serde_json::{Value, json};

use crate::api::error::ApiResult;
use crate::api::workouts::ListQuery;
use crate::infrastructure::AppState;
use crate::infrastructure::auth::AuthUser;
use crate::services::activity_service;
use crate::services::dashboard_service::{self, Dashboard};

pub async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Dashboard>> {
    let dashboard = dashboard_service::dashboard(state.db(), auth.user_id, Utc::now()).await?;
    Ok(Json(dashboard))
}

pub async fn list_activities(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    let limit = query.limit_or(20, 200);
    let activities = activity_service::list_recent(state.db(), auth.user_id, limit).await?;
    Ok(Json(json!({ "activities": activities })))
}
