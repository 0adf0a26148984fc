//! Challenge Service - joining catalog challenges and tracking progress

use chrono::{DateTime, Utc};
use sea_orm::*;
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::challenges::evaluate_workout_event;
use crate::domain::{ChallengeType, DomainError, ProgressOutcome, WorkoutEventContext};
use crate::models::activity::ActivityKind;
use crate::models::challenge::{self, Entity as Challenge};
use crate::models::user_challenge::{self, Entity as UserChallenge};
use crate::services::activity_service;
use crate::utils::time::to_timestamp;

/// Catalog entry enriched with the caller's participation
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub challenge_type: String,
    pub target_value: i32,
    pub points_reward: i32,
    pub badge_name: String,
    /// Whether completing workouts moves this challenge forward
    pub tracked: bool,
    pub joined: bool,
    pub current_progress: i32,
    pub is_completed: bool,
    pub completed_at: Option<String>,
}

impl ChallengeView {
    fn new(challenge: challenge::Model, joined: Option<&user_challenge::Model>) -> Self {
        let tracked = ChallengeType::parse(&challenge.challenge_type)
            .map(ChallengeType::is_workout_driven)
            .unwrap_or(false);

        Self {
            id: challenge.id,
            name: challenge.name,
            description: challenge.description,
            challenge_type: challenge.challenge_type,
            target_value: challenge.target_value,
            points_reward: challenge.points_reward,
            badge_name: challenge.badge_name,
            tracked,
            joined: joined.is_some(),
            current_progress: joined.map(|uc| uc.current_progress).unwrap_or(0),
            is_completed: joined.map(|uc| uc.is_completed).unwrap_or(false),
            completed_at: joined.and_then(|uc| uc.completed_at.clone()),
        }
    }
}

/// A challenge that flipped to completed during the current event
#[derive(Debug, Clone, Serialize)]
pub struct CompletedChallenge {
    pub challenge_id: i32,
    pub name: String,
    pub badge_name: String,
    pub points_reward: i32,
}

/// Full catalog with the user's progress on the ones they joined
pub async fn list_for_user<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
) -> Result<Vec<ChallengeView>, DomainError> {
    let catalog = Challenge::find()
        .order_by_asc(challenge::Column::Id)
        .all(conn)
        .await?;

    let joined: HashMap<i32, user_challenge::Model> = UserChallenge::find()
        .filter(user_challenge::Column::UserId.eq(user_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|uc| (uc.challenge_id, uc))
        .collect();

    Ok(catalog
        .into_iter()
        .map(|c| {
            let participation = joined.get(&c.id);
            ChallengeView::new(c, participation)
        })
        .collect())
}

/// Join a catalog challenge. Joining twice is a conflict.
pub async fn join(
    db: &DatabaseConnection,
    user_id: i32,
    challenge_id: i32,
    now: DateTime<Utc>,
) -> Result<user_challenge::Model, DomainError> {
    let stamp = to_timestamp(now);
    let txn = db.begin().await?;

    let challenge = Challenge::find_by_id(challenge_id)
        .one(&txn)
        .await?
        .ok_or(DomainError::NotFound("Challenge"))?;

    let existing = UserChallenge::find()
        .filter(user_challenge::Column::UserId.eq(user_id))
        .filter(user_challenge::Column::ChallengeId.eq(challenge_id))
        .one(&txn)
        .await?;

    if existing.is_some() {
        return Err(DomainError::Conflict(format!(
            "You have already joined {}",
            challenge.name
        )));
    }

    let joined = user_challenge::ActiveModel {
        user_id: Set(user_id),
        challenge_id: Set(challenge_id),
        current_progress: Set(0),
        is_completed: Set(false),
        joined_at: Set(stamp.clone()),
        completed_at: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    activity_service::record(
        &txn,
        user_id,
        ActivityKind::ChallengeJoined,
        format!("Joined challenge: {}", challenge.name),
        challenge.description,
        0,
        &stamp,
    )
    .await?;

    txn.commit().await?;
    tracing::info!("User {} joined challenge {}", user_id, challenge_id);

    Ok(joined)
}

/// Join every catalog challenge. Used at signup when auto-join is enabled.
pub async fn join_all<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    at: &str,
) -> Result<usize, DomainError> {
    let catalog = Challenge::find().all(conn).await?;
    if catalog.is_empty() {
        return Ok(0);
    }

    // Only called for a brand new user; UNIQUE(user_id, challenge_id) still
    // rejects a duplicate row as a Conflict.
    let count = catalog.len();
    let rows = catalog.into_iter().map(|c| user_challenge::ActiveModel {
        user_id: Set(user_id),
        challenge_id: Set(c.id),
        current_progress: Set(0),
        is_completed: Set(false),
        joined_at: Set(at.to_owned()),
        completed_at: Set(None),
        ..Default::default()
    });
    UserChallenge::insert_many(rows).exec(conn).await?;

    Ok(count)
}

/// Advance every active challenge of the user after a completed workout.
///
/// Challenges reaching their target are marked completed and get an
/// achievement activity. The caller adds the returned rewards to the user's
/// points inside the same transaction.
pub async fn advance_for_workout<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    ctx: &WorkoutEventContext,
    at: &str,
) -> Result<Vec<CompletedChallenge>, DomainError> {
    let active = UserChallenge::find()
        .filter(user_challenge::Column::UserId.eq(user_id))
        .filter(user_challenge::Column::IsCompleted.eq(false))
        .find_also_related(Challenge)
        .all(conn)
        .await?;

    let mut completed = Vec::new();

    for (row, challenge) in active {
        let Some(challenge) = challenge else {
            continue;
        };
        let Some(kind) = ChallengeType::parse(&challenge.challenge_type) else {
            tracing::warn!(
                "Challenge {} has unknown type '{}'",
                challenge.id,
                challenge.challenge_type
            );
            continue;
        };

        let outcome = evaluate_workout_event(
            kind,
            row.current_progress,
            challenge.target_value,
            row.is_completed,
            ctx,
        );

        match outcome {
            ProgressOutcome::Unchanged => {}
            ProgressOutcome::Advanced(progress) => {
                if progress != row.current_progress {
                    let mut active: user_challenge::ActiveModel = row.into();
                    active.current_progress = Set(progress);
                    active.update(conn).await?;
                }
            }
            ProgressOutcome::Completed(progress) => {
                let mut active: user_challenge::ActiveModel = row.into();
                active.current_progress = Set(progress);
                active.is_completed = Set(true);
                active.completed_at = Set(Some(at.to_owned()));
                active.update(conn).await?;

                activity_service::record(
                    conn,
                    user_id,
                    ActivityKind::Achievement,
                    format!("Challenge completed: {}", challenge.name),
                    format!("Earned the {} badge", challenge.badge_name),
                    challenge.points_reward,
                    at,
                )
                .await?;

                tracing::info!(
                    "User {} completed challenge {} (+{} points)",
                    user_id,
                    challenge.id,
                    challenge.points_reward
                );

                completed.push(CompletedChallenge {
                    challenge_id: challenge.id,
                    name: challenge.name,
                    badge_name: challenge.badge_name,
                    points_reward: challenge.points_reward,
                });
            }
        }
    }

    Ok(completed)
}
