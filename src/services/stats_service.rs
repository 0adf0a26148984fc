//! Per-user aggregate stats

use sea_orm::*;

use crate::domain::progression::add_points;
use crate::domain::{DomainError, LevelChange};
use crate::models::activity::ActivityKind;
use crate::models::user_stats::{self, Entity as UserStats};
use crate::services::activity_service;

pub async fn load<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
) -> Result<user_stats::Model, DomainError> {
    UserStats::find()
        .filter(user_stats::Column::UserId.eq(user_id))
        .one(conn)
        .await?
        .ok_or(DomainError::NotFound("User"))
}

/// Add bonus points outside of a workout (goals) and recompute the level.
pub async fn award_points<C: ConnectionTrait>(
    conn: &C,
    stats: user_stats::Model,
    points: i32,
    at: &str,
) -> Result<(user_stats::Model, LevelChange), DomainError> {
    let user_id = stats.user_id;
    let change = add_points(stats.total_points, stats.level, points);

    let mut active: user_stats::ActiveModel = stats.into();
    active.total_points = Set(change.total_points);
    active.level = Set(change.level);
    active.updated_at = Set(at.to_owned());
    let updated = active.update(conn).await?;

    if change.leveled_up {
        record_level_up(conn, user_id, change.level, at).await?;
    }

    Ok((updated, change))
}

pub async fn record_level_up<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    level: i32,
    at: &str,
) -> Result<(), DomainError> {
    tracing::info!("User {} reached level {}", user_id, level);
    activity_service::record(
        conn,
        user_id,
        ActivityKind::LevelUp,
        format!("Level up! You reached level {}", level),
        "Keep training to unlock the next level".to_owned(),
        0,
        at,
    )
    .await?;
    Ok(())
}
