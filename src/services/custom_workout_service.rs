//! Custom Workout Service - user-defined workout templates

use chrono::{DateTime, Utc};
use sea_orm::*;

use crate::domain::DomainError;
use crate::models::custom_workout::{self, CustomWorkoutDto, Entity as CustomWorkout};
use crate::services::workout_service::validate_workout_fields;
use crate::utils::time::to_timestamp;

pub async fn create_custom_workout(
    db: &DatabaseConnection,
    user_id: i32,
    dto: CustomWorkoutDto,
    now: DateTime<Utc>,
) -> Result<custom_workout::Model, DomainError> {
    let name = dto.name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation("Workout name is required".into()));
    }
    let (workout_type, difficulty) =
        validate_workout_fields(&dto.workout_type, dto.duration, &dto.difficulty)?;

    let saved = custom_workout::ActiveModel {
        user_id: Set(user_id),
        name: Set(name.to_owned()),
        workout_type: Set(workout_type),
        duration: Set(dto.duration),
        difficulty: Set(difficulty),
        description: Set(dto
            .description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty())),
        created_at: Set(to_timestamp(now)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(saved)
}

pub async fn list_custom_workouts(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<custom_workout::Model>, DomainError> {
    let workouts = CustomWorkout::find()
        .filter(custom_workout::Column::UserId.eq(user_id))
        .order_by_asc(custom_workout::Column::Name)
        .all(db)
        .await?;
    Ok(workouts)
}

pub async fn delete_custom_workout(
    db: &DatabaseConnection,
    user_id: i32,
    id: i32,
) -> Result<(), DomainError> {
    let result = CustomWorkout::delete_many()
        .filter(custom_workout::Column::Id.eq(id))
        .filter(custom_workout::Column::UserId.eq(user_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(DomainError::NotFound("Custom workout"));
    }
    Ok(())
}
