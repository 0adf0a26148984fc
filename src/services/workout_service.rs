//! Workout Service - logging workouts and applying their effects
//!
//! Completing a workout is the main state transition of the app. One
//! transaction covers the workout insert, the stats update, challenge
//! progress and every feed entry, so a failure part way leaves no partial
//! point award behind.

use chrono::{DateTime, Utc};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::progression::{MAX_WORKOUT_MINUTES, add_points, next_streak, points_for};
use crate::domain::{Difficulty, DomainError, WorkoutEventContext};
use crate::models::activity::ActivityKind;
use crate::models::user_stats;
use crate::models::workout::{self, Entity as Workout};
use crate::services::challenge_service::{self, CompletedChallenge};
use crate::services::{activity_service, stats_service};
use crate::utils::time::{iso_week_bounds, timestamp_date, to_timestamp};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CompleteWorkoutInput {
    pub workout_type: String,
    pub duration: i32,
    pub difficulty: String,
}

/// Everything that changed because of one completed workout
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutOutcome {
    pub workout: workout::Model,
    pub points_earned: i32,
    pub total_points: i32,
    pub level: i32,
    pub leveled_up: bool,
    pub current_streak: i32,
    pub completed_challenges: Vec<CompletedChallenge>,
}

/// Shared validation for logged workouts and custom workout templates.
///
/// Returns the trimmed workout type and the difficulty label to store:
/// canonical casing when recognised, the trimmed input otherwise.
pub fn validate_workout_fields(
    workout_type: &str,
    duration: i32,
    difficulty: &str,
) -> Result<(String, String), DomainError> {
    let workout_type = workout_type.trim();
    if workout_type.is_empty() {
        return Err(DomainError::Validation("Workout type is required".into()));
    }
    if duration <= 0 || duration > MAX_WORKOUT_MINUTES {
        return Err(DomainError::Validation(format!(
            "Duration must be between 1 and {} minutes",
            MAX_WORKOUT_MINUTES
        )));
    }
    let difficulty = difficulty.trim();
    if difficulty.is_empty() {
        return Err(DomainError::Validation("Difficulty is required".into()));
    }

    let difficulty = Difficulty::parse(difficulty)
        .map(|d| d.as_str().to_owned())
        .unwrap_or_else(|| difficulty.to_owned());

    Ok((workout_type.to_owned(), difficulty))
}

/// Log a completed workout and apply progression, streak and challenge updates.
pub async fn complete_workout(
    db: &DatabaseConnection,
    user_id: i32,
    input: CompleteWorkoutInput,
    now: DateTime<Utc>,
) -> Result<WorkoutOutcome, DomainError> {
    let (workout_type, difficulty) =
        validate_workout_fields(&input.workout_type, input.duration, &input.difficulty)?;
    let stamp = to_timestamp(now);

    let txn = db.begin().await?;

    let stats = stats_service::load(&txn, user_id).await?;

    // Most recent workout before this one
    let previous = Workout::find()
        .filter(workout::Column::UserId.eq(user_id))
        .order_by_desc(workout::Column::CompletedAt)
        .order_by_desc(workout::Column::Id)
        .one(&txn)
        .await?;

    let points_earned = points_for(input.duration, &difficulty);

    let saved = workout::ActiveModel {
        user_id: Set(user_id),
        workout_type: Set(workout_type.clone()),
        duration: Set(input.duration),
        difficulty: Set(difficulty.clone()),
        points_earned: Set(points_earned),
        completed_at: Set(stamp.clone()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    activity_service::record(
        &txn,
        user_id,
        ActivityKind::Workout,
        format!("Completed a {} workout", workout_type),
        format!("{} minutes at {} difficulty", input.duration, difficulty),
        points_earned,
        &stamp,
    )
    .await?;

    let last_date = previous.as_ref().and_then(|w| timestamp_date(&w.completed_at));
    let current_streak = next_streak(stats.current_streak, last_date, now.date_naive());

    let ctx = WorkoutEventContext {
        current_streak,
        workouts_this_week: count_in_week(&txn, user_id, now).await? as i32,
    };
    let completed_challenges =
        challenge_service::advance_for_workout(&txn, user_id, &ctx, &stamp).await?;
    let bonus: i32 = completed_challenges.iter().map(|c| c.points_reward).sum();

    let change = add_points(stats.total_points, stats.level, points_earned + bonus);

    let longest_streak = stats.longest_streak.max(current_streak);
    let total_workouts = stats.total_workouts + 1;
    let total_time_minutes = stats.total_time_minutes + input.duration;

    let mut active: user_stats::ActiveModel = stats.into();
    active.current_streak = Set(current_streak);
    active.longest_streak = Set(longest_streak);
    active.total_workouts = Set(total_workouts);
    active.total_time_minutes = Set(total_time_minutes);
    active.total_points = Set(change.total_points);
    active.level = Set(change.level);
    active.updated_at = Set(stamp.clone());
    active.update(&txn).await?;

    if change.leveled_up {
        stats_service::record_level_up(&txn, user_id, change.level, &stamp).await?;
    }

    txn.commit().await?;

    tracing::info!(
        "User {} completed {} min {} workout: +{} points (streak {})",
        user_id,
        input.duration,
        difficulty,
        points_earned,
        current_streak
    );

    Ok(WorkoutOutcome {
        workout: saved,
        points_earned,
        total_points: change.total_points,
        level: change.level,
        leveled_up: change.leveled_up,
        current_streak,
        completed_challenges,
    })
}

/// Workouts the user logged in the ISO week (Monday start, UTC) containing `now`
pub async fn count_in_week<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    now: DateTime<Utc>,
) -> Result<u64, DomainError> {
    let (start, end) = iso_week_bounds(now);
    let count = Workout::find()
        .filter(workout::Column::UserId.eq(user_id))
        .filter(workout::Column::CompletedAt.gte(to_timestamp(start)))
        .filter(workout::Column::CompletedAt.lt(to_timestamp(end)))
        .count(conn)
        .await?;
    Ok(count)
}

/// Workout history, newest first
pub async fn list_history(
    db: &DatabaseConnection,
    user_id: i32,
    limit: u64,
) -> Result<Vec<workout::Model>, DomainError> {
    let workouts = Workout::find()
        .filter(workout::Column::UserId.eq(user_id))
        .order_by_desc(workout::Column::CompletedAt)
        .order_by_desc(workout::Column::Id)
        .limit(limit)
        .all(db)
        .await?;
    Ok(workouts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_missing_fields() {
        assert!(matches!(
            validate_workout_fields("  ", 30, "Easy"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            validate_workout_fields("cardio", 0, "Easy"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            validate_workout_fields("cardio", 2000, "Easy"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            validate_workout_fields("cardio", 30, ""),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn validation_normalises_known_difficulty() {
        let (kind, difficulty) = validate_workout_fields(" Cardio ", 30, "hard").unwrap();
        assert_eq!(kind, "Cardio");
        assert_eq!(difficulty, "Hard");

        let (_, difficulty) = validate_workout_fields("cardio", 30, "Brutal").unwrap();
        assert_eq!(difficulty, "Brutal");
    }
}
