//! Activity feed - append-only

use sea_orm::*;

use crate::domain::DomainError;
use crate::models::activity::{self, ActivityKind, Entity as Activity};

/// Append a feed entry. Runs on whatever connection or transaction is passed in.
pub async fn record<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    kind: ActivityKind,
    title: String,
    description: String,
    points_earned: i32,
    at: &str,
) -> Result<activity::Model, DbErr> {
    activity::ActiveModel {
        user_id: Set(user_id),
        activity_type: Set(kind.as_str().to_owned()),
        title: Set(title),
        description: Set(description),
        points_earned: Set(points_earned),
        created_at: Set(at.to_owned()),
        ..Default::default()
    }
    .insert(conn)
    .await
}

/// Most recent entries first
pub async fn list_recent<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    limit: u64,
) -> Result<Vec<activity::Model>, DomainError> {
    let activities = Activity::find()
        .filter(activity::Column::UserId.eq(user_id))
        .order_by_desc(activity::Column::CreatedAt)
        .order_by_desc(activity::Column::Id)
        .limit(limit)
        .all(conn)
        .await?;
    Ok(activities)
}
