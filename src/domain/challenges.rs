//! Challenge progress rules.
//!
//! Only three challenge types are driven by workout completion today:
//! `workout_count`, `streak` and `weekly_goal`. The remaining catalog types
//! have no producing event yet and are left untouched.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeType {
    Streak,
    WorkoutCount,
    WeeklyGoal,
    Distance,
    Calories,
    Time,
    Points,
    Variety,
    ChallengeCount,
    Ultimate,
    PersonalRecord,
}

impl ChallengeType {
    pub const ALL: [ChallengeType; 11] = [
        ChallengeType::Streak,
        ChallengeType::WorkoutCount,
        ChallengeType::WeeklyGoal,
        ChallengeType::Distance,
        ChallengeType::Calories,
        ChallengeType::Time,
        ChallengeType::Points,
        ChallengeType::Variety,
        ChallengeType::ChallengeCount,
        ChallengeType::Ultimate,
        ChallengeType::PersonalRecord,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChallengeType::Streak => "streak",
            ChallengeType::WorkoutCount => "workout_count",
            ChallengeType::WeeklyGoal => "weekly_goal",
            ChallengeType::Distance => "distance",
            ChallengeType::Calories => "calories",
            ChallengeType::Time => "time",
            ChallengeType::Points => "points",
            ChallengeType::Variety => "variety",
            ChallengeType::ChallengeCount => "challenge_count",
            ChallengeType::Ultimate => "ultimate",
            ChallengeType::PersonalRecord => "personal_record",
        }
    }

    /// Whether completing a workout moves this challenge forward.
    pub fn is_workout_driven(self) -> bool {
        matches!(
            self,
            ChallengeType::WorkoutCount | ChallengeType::Streak | ChallengeType::WeeklyGoal
        )
    }
}

/// What the tracker knows about the user right after a workout was logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutEventContext {
    /// Streak after the workout was applied
    pub current_streak: i32,
    /// Workouts in the current ISO week, including the one just logged
    pub workouts_this_week: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressOutcome {
    /// Completed already, or a type this event doesn't drive
    Unchanged,
    Advanced(i32),
    Completed(i32),
}

/// Progress for one joined challenge after a completed workout.
///
/// Completed challenges are terminal: re-applying the event never yields
/// `Completed` twice.
pub fn evaluate_workout_event(
    kind: ChallengeType,
    current_progress: i32,
    target_value: i32,
    is_completed: bool,
    ctx: &WorkoutEventContext,
) -> ProgressOutcome {
    if is_completed {
        return ProgressOutcome::Unchanged;
    }

    let progress = match kind {
        ChallengeType::WorkoutCount => current_progress + 1,
        ChallengeType::Streak => ctx.current_streak,
        ChallengeType::WeeklyGoal => ctx.workouts_this_week,
        _ => return ProgressOutcome::Unchanged,
    };

    if progress >= target_value {
        ProgressOutcome::Completed(progress)
    } else {
        ProgressOutcome::Advanced(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(streak: i32, week: i32) -> WorkoutEventContext {
        WorkoutEventContext {
            current_streak: streak,
            workouts_this_week: week,
        }
    }

    #[test]
    fn parse_round_trips_catalog_names() {
        for kind in ChallengeType::ALL {
            assert_eq!(ChallengeType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ChallengeType::parse("marathon"), None);
    }

    #[test]
    fn workout_count_increments() {
        let outcome = evaluate_workout_event(ChallengeType::WorkoutCount, 2, 5, false, &ctx(1, 1));
        assert_eq!(outcome, ProgressOutcome::Advanced(3));

        let outcome = evaluate_workout_event(ChallengeType::WorkoutCount, 4, 5, false, &ctx(1, 1));
        assert_eq!(outcome, ProgressOutcome::Completed(5));
    }

    #[test]
    fn streak_overwrites_progress() {
        // A broken streak moves progress backwards rather than accumulating.
        let outcome = evaluate_workout_event(ChallengeType::Streak, 4, 7, false, &ctx(1, 3));
        assert_eq!(outcome, ProgressOutcome::Advanced(1));

        let outcome = evaluate_workout_event(ChallengeType::Streak, 6, 7, false, &ctx(7, 3));
        assert_eq!(outcome, ProgressOutcome::Completed(7));
    }

    #[test]
    fn weekly_goal_uses_week_count() {
        let outcome = evaluate_workout_event(ChallengeType::WeeklyGoal, 0, 5, false, &ctx(1, 3));
        assert_eq!(outcome, ProgressOutcome::Advanced(3));

        let outcome = evaluate_workout_event(ChallengeType::WeeklyGoal, 3, 5, false, &ctx(1, 6));
        assert_eq!(outcome, ProgressOutcome::Completed(6));
    }

    #[test]
    fn completed_challenge_is_terminal() {
        for kind in ChallengeType::ALL {
            let outcome = evaluate_workout_event(kind, 10, 5, true, &ctx(30, 7));
            assert_eq!(outcome, ProgressOutcome::Unchanged);
        }
    }

    #[test]
    fn unwired_types_are_left_alone() {
        for kind in ChallengeType::ALL.into_iter().filter(|k| !k.is_workout_driven()) {
            let outcome = evaluate_workout_event(kind, 0, 1, false, &ctx(30, 7));
            assert_eq!(outcome, ProgressOutcome::Unchanged);
        }
    }
}
