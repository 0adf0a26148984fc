use axum::{Json, extract::Path};
use serde_json::{Value, json};

use crate::api::error::ApiResult;
use crate::domain::DomainError;
use crate::domain::catalog::{WorkoutType, weekly_schedule};

pub async fn workout_plan() -> Json<Value> {
    Json(json!({
        "schedule": weekly_schedule(),
        "workout_types": WorkoutType::ALL,
    }))
}

pub async fn list_exercises(Path(workout_type): Path<String>) -> ApiResult<Json<Value>> {
    let kind = WorkoutType::parse(&workout_type).ok_or(DomainError::NotFound("Workout type"))?;
    Ok(Json(json!({
        "workout_type": kind,
        "exercises": kind.exercises(),
    })))
}
