//! Dashboard aggregation

use chrono::{DateTime, Datelike, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::domain::DomainError;
use crate::domain::catalog::{WorkoutType, scheduled_for};
use crate::domain::progression::points_to_next_level;
use crate::models::{UserDto, activity, goal, user_stats};
use crate::services::challenge_service::{self, ChallengeView};
use crate::services::{account_service, activity_service, goal_service, workout_service};

const RECENT_ACTIVITY_LIMIT: u64 = 10;

#[derive(Debug, Clone, Serialize)]
pub struct PlannedWorkout {
    pub workout_type: WorkoutType,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub user: UserDto,
    pub stats: user_stats::Model,
    pub points_to_next_level: i32,
    pub workouts_this_week: u64,
    /// `None` on rest days
    pub todays_plan: Option<PlannedWorkout>,
    pub active_goals: Vec<goal::Model>,
    pub challenges: Vec<ChallengeView>,
    pub recent_activities: Vec<activity::Model>,
}

pub async fn dashboard(
    db: &DatabaseConnection,
    user_id: i32,
    now: DateTime<Utc>,
) -> Result<Dashboard, DomainError> {
    let (user, stats) = account_service::profile(db, user_id).await?;

    let workouts_this_week = workout_service::count_in_week(db, user_id, now).await?;

    let active_goals = goal_service::list_goals(db, user_id)
        .await?
        .into_iter()
        .filter(|g| !g.is_completed)
        .collect();

    let challenges = challenge_service::list_for_user(db, user_id)
        .await?
        .into_iter()
        .filter(|c| c.joined)
        .collect();

    let recent_activities =
        activity_service::list_recent(db, user_id, RECENT_ACTIVITY_LIMIT).await?;

    let todays_plan = scheduled_for(now.weekday()).map(|(workout_type, duration_minutes)| {
        PlannedWorkout {
            workout_type,
            duration_minutes,
        }
    });

    Ok(Dashboard {
        user: user.into(),
        points_to_next_level: points_to_next_level(stats.total_points),
        stats,
        workouts_this_week,
        todays_plan,
        active_goals,
        challenges,
        recent_activities,
    })
}
