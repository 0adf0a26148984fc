//! Goal Service - user-defined targets
//!
//! A goal moves from active to completed exactly once. Completion awards
//! `floor(target) * 10` points; later updates only move `current_value`.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::*;
use serde::Serialize;

use crate::domain::DomainError;
use crate::domain::progression::{MAX_GOAL_TARGET, goal_points};
use crate::models::activity::ActivityKind;
use crate::models::goal::{self, Entity as Goal, GoalDto};
use crate::services::{activity_service, stats_service};
use crate::utils::time::to_timestamp;

#[derive(Debug, Clone, Serialize)]
pub struct GoalUpdate {
    pub goal: goal::Model,
    /// True only for the update that crossed the target
    pub just_completed: bool,
    pub points_awarded: i32,
}

pub async fn create_goal(
    db: &DatabaseConnection,
    user_id: i32,
    dto: GoalDto,
    now: DateTime<Utc>,
) -> Result<goal::Model, DomainError> {
    let goal_type = dto.goal_type.trim();
    if goal_type.is_empty() {
        return Err(DomainError::Validation("Goal type is required".into()));
    }
    if !dto.target_value.is_finite() || dto.target_value <= 0.0 {
        return Err(DomainError::Validation(
            "Target value must be a positive number".into(),
        ));
    }
    if dto.target_value > MAX_GOAL_TARGET {
        return Err(DomainError::Validation(format!(
            "Target value must be at most {}",
            MAX_GOAL_TARGET
        )));
    }
    let unit = dto.unit.trim();
    if unit.is_empty() {
        return Err(DomainError::Validation("Unit is required".into()));
    }

    let target_date = match dto.target_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                DomainError::Validation("Target date must be formatted as YYYY-MM-DD".into())
            })?;
            Some(date.format("%Y-%m-%d").to_string())
        }
    };

    let stamp = to_timestamp(now);
    let saved = goal::ActiveModel {
        user_id: Set(user_id),
        goal_type: Set(goal_type.to_owned()),
        target_value: Set(dto.target_value),
        current_value: Set(0.0),
        unit: Set(unit.to_owned()),
        target_date: Set(target_date),
        is_completed: Set(false),
        completed_at: Set(None),
        created_at: Set(stamp.clone()),
        updated_at: Set(stamp),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(saved)
}

/// Active goals first, newest first within each group
pub async fn list_goals<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
) -> Result<Vec<goal::Model>, DomainError> {
    let goals = Goal::find()
        .filter(goal::Column::UserId.eq(user_id))
        .order_by_asc(goal::Column::IsCompleted)
        .order_by_desc(goal::Column::CreatedAt)
        .order_by_desc(goal::Column::Id)
        .all(conn)
        .await?;
    Ok(goals)
}

async fn find_owned<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    goal_id: i32,
) -> Result<goal::Model, DomainError> {
    // Someone else's goal looks exactly like a missing one
    Goal::find_by_id(goal_id)
        .filter(goal::Column::UserId.eq(user_id))
        .one(conn)
        .await?
        .ok_or(DomainError::NotFound("Goal"))
}

/// Set the goal's current value, completing it when the target is reached.
pub async fn update_goal(
    db: &DatabaseConnection,
    user_id: i32,
    goal_id: i32,
    current_value: f64,
    now: DateTime<Utc>,
) -> Result<GoalUpdate, DomainError> {
    if !current_value.is_finite() || current_value < 0.0 {
        return Err(DomainError::Validation(
            "Current value must be zero or a positive number".into(),
        ));
    }

    let stamp = to_timestamp(now);
    let txn = db.begin().await?;

    let existing = find_owned(&txn, user_id, goal_id).await?;
    let reaches_target = !existing.is_completed && current_value >= existing.target_value;
    let target_value = existing.target_value;
    let goal_type = existing.goal_type.clone();

    let mut active: goal::ActiveModel = existing.into();
    active.current_value = Set(current_value);
    active.updated_at = Set(stamp.clone());
    if reaches_target {
        active.is_completed = Set(true);
        active.completed_at = Set(Some(stamp.clone()));
    }
    let updated = active.update(&txn).await?;

    let mut points_awarded = 0;
    if reaches_target {
        points_awarded = goal_points(target_value);

        activity_service::record(
            &txn,
            user_id,
            ActivityKind::Goal,
            format!("Goal completed: {}", goal_type),
            format!("Reached {} {}", target_value, updated.unit),
            points_awarded,
            &stamp,
        )
        .await?;

        let stats = stats_service::load(&txn, user_id).await?;
        stats_service::award_points(&txn, stats, points_awarded, &stamp).await?;

        tracing::info!(
            "User {} completed goal {} (+{} points)",
            user_id,
            goal_id,
            points_awarded
        );
    }

    txn.commit().await?;

    Ok(GoalUpdate {
        goal: updated,
        just_completed: reaches_target,
        points_awarded,
    })
}

/// Delete a goal in any state
pub async fn delete_goal(
    db: &DatabaseConnection,
    user_id: i32,
    goal_id: i32,
) -> Result<(), DomainError> {
    let goal = find_owned(db, user_id, goal_id).await?;
    goal.delete(db).await?;
    Ok(())
}
