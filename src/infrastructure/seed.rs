use chrono::Utc;
use sea_orm::*;

use crate::domain::ChallengeType;
use crate::models::challenge;
use crate::utils::time::to_timestamp;

/// A catalog entry inserted on first start.
pub struct ChallengeSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub challenge_type: ChallengeType,
    pub target_value: i32,
    pub points_reward: i32,
    pub badge_name: &'static str,
}

pub const CHALLENGE_CATALOG: &[ChallengeSeed] = &[
    ChallengeSeed {
        name: "First Steps",
        description: "Complete your first workout",
        challenge_type: ChallengeType::WorkoutCount,
        target_value: 1,
        points_reward: 50,
        badge_name: "Rookie",
    },
    ChallengeSeed {
        name: "Getting Serious",
        description: "Complete 5 workouts",
        challenge_type: ChallengeType::WorkoutCount,
        target_value: 5,
        points_reward: 100,
        badge_name: "Committed",
    },
    ChallengeSeed {
        name: "Half Century",
        description: "Complete 50 workouts",
        challenge_type: ChallengeType::WorkoutCount,
        target_value: 50,
        points_reward: 500,
        badge_name: "Veteran",
    },
    ChallengeSeed {
        name: "Three-Day Streak",
        description: "Work out three days in a row",
        challenge_type: ChallengeType::Streak,
        target_value: 3,
        points_reward: 75,
        badge_name: "On Fire",
    },
    ChallengeSeed {
        name: "Week Warrior",
        description: "Work out seven days in a row",
        challenge_type: ChallengeType::Streak,
        target_value: 7,
        points_reward: 200,
        badge_name: "Unstoppable",
    },
    ChallengeSeed {
        name: "Busy Week",
        description: "Complete 5 workouts in a single week",
        challenge_type: ChallengeType::WeeklyGoal,
        target_value: 5,
        points_reward: 150,
        badge_name: "Weekly Hero",
    },
    ChallengeSeed {
        name: "Distance Runner",
        description: "Cover 42 km in total",
        challenge_type: ChallengeType::Distance,
        target_value: 42,
        points_reward: 300,
        badge_name: "Marathoner",
    },
    ChallengeSeed {
        name: "Calorie Crusher",
        description: "Burn 10000 calories",
        challenge_type: ChallengeType::Calories,
        target_value: 10_000,
        points_reward: 300,
        badge_name: "Furnace",
    },
    ChallengeSeed {
        name: "Time Invested",
        description: "Train for 1000 minutes in total",
        challenge_type: ChallengeType::Time,
        target_value: 1000,
        points_reward: 250,
        badge_name: "Dedicated",
    },
    ChallengeSeed {
        name: "Point Collector",
        description: "Earn 1000 points",
        challenge_type: ChallengeType::Points,
        target_value: 1000,
        points_reward: 100,
        badge_name: "Collector",
    },
    ChallengeSeed {
        name: "Mix It Up",
        description: "Try 5 different workout types",
        challenge_type: ChallengeType::Variety,
        target_value: 5,
        points_reward: 150,
        badge_name: "Explorer",
    },
    ChallengeSeed {
        name: "Challenge Accepted",
        description: "Complete 5 other challenges",
        challenge_type: ChallengeType::ChallengeCount,
        target_value: 5,
        points_reward: 250,
        badge_name: "Achiever",
    },
    ChallengeSeed {
        name: "Personal Best",
        description: "Set a new personal record",
        challenge_type: ChallengeType::PersonalRecord,
        target_value: 1,
        points_reward: 100,
        badge_name: "Record Breaker",
    },
    ChallengeSeed {
        name: "CoachSmart Legend",
        description: "Complete every other challenge",
        challenge_type: ChallengeType::Ultimate,
        target_value: 1,
        points_reward: 1000,
        badge_name: "Legend",
    },
];

/// Populate the challenge catalog once, when the table is empty.
///
/// Returns the number of rows inserted.
pub async fn seed_challenges(db: &DatabaseConnection) -> Result<usize, DbErr> {
    if challenge::Entity::find().count(db).await? > 0 {
        return Ok(0);
    }

    let now = to_timestamp(Utc::now());
    let rows = CHALLENGE_CATALOG.iter().map(|seed| challenge::ActiveModel {
        name: Set(seed.name.to_owned()),
        description: Set(seed.description.to_owned()),
        challenge_type: Set(seed.challenge_type.as_str().to_owned()),
        target_value: Set(seed.target_value),
        points_reward: Set(seed.points_reward),
        badge_name: Set(seed.badge_name.to_owned()),
        created_at: Set(now.clone()),
        ..Default::default()
    });

    challenge::Entity::insert_many(rows).exec(db).await?;
    tracing::info!("Seeded {} catalog challenges", CHALLENGE_CATALOG.len());

    Ok(CHALLENGE_CATALOG.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_challenge_type() {
        for kind in ChallengeType::ALL {
            assert!(
                CHALLENGE_CATALOG.iter().any(|c| c.challenge_type == kind),
                "no catalog entry for {}",
                kind.as_str()
            );
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<_> = CHALLENGE_CATALOG.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CHALLENGE_CATALOG.len());
    }
}
