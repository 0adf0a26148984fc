//! Points, levels and streaks.
//!
//! Every workout earns `round(duration * 2 * multiplier)` points. Levels are
//! derived from cumulative points and never go down. Streaks count
//! consecutive UTC calendar days with at least one logged workout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Points earned per minute before the difficulty multiplier is applied.
pub const POINTS_PER_MINUTE: f64 = 2.0;

/// Multiplier used when a workout carries a difficulty we don't recognise.
pub const DEFAULT_MULTIPLIER: f64 = 1.5;

/// Points needed to advance one level.
pub const POINTS_PER_LEVEL: i32 = 100;

/// Points awarded per whole unit of a completed goal's target.
pub const GOAL_POINTS_PER_UNIT: i32 = 10;

/// Longest single workout we accept, in minutes.
pub const MAX_WORKOUT_MINUTES: i32 = 24 * 60;

/// Largest goal target we accept; keeps the completion award well inside `i32`.
pub const MAX_GOAL_TARGET: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Intense,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Intense,
    ];

    /// Case-insensitive lookup; `None` for anything outside the four tiers.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Intense => "Intense",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
            Difficulty::Intense => 2.5,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points earned for a workout of `duration_minutes` at the given difficulty label.
pub fn points_for(duration_minutes: i32, difficulty: &str) -> i32 {
    let multiplier = Difficulty::parse(difficulty)
        .map(Difficulty::multiplier)
        .unwrap_or(DEFAULT_MULTIPLIER);
    (f64::from(duration_minutes) * POINTS_PER_MINUTE * multiplier).round() as i32
}

/// Level for a point total: `floor(total / 100) + 1`. Negative totals clamp to level 1.
pub fn level_for(total_points: i32) -> i32 {
    total_points.max(0) / POINTS_PER_LEVEL + 1
}

/// Points still missing before the next level.
pub fn points_to_next_level(total_points: i32) -> i32 {
    let next = i64::from(level_for(total_points)) * i64::from(POINTS_PER_LEVEL);
    (next - i64::from(total_points.max(0))).clamp(0, i64::from(i32::MAX)) as i32
}

/// Points for completing a goal, awarded once: `floor(target) * 10`.
/// Saturates at `i32::MAX` for targets beyond anything `create_goal` accepts.
pub fn goal_points(target_value: f64) -> i32 {
    let units = target_value.floor().max(0.0) as i64;
    units
        .saturating_mul(i64::from(GOAL_POINTS_PER_UNIT))
        .min(i64::from(i32::MAX)) as i32
}

/// Result of adding points to a user's running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub total_points: i32,
    pub level: i32,
    pub leveled_up: bool,
}

/// Add `points` to the running total and recompute the level.
///
/// The stored level is kept if it is already higher than the derived one, so
/// a level never decreases.
pub fn add_points(total_points: i32, level: i32, points: i32) -> LevelChange {
    let total_points = total_points.saturating_add(points.max(0));
    let new_level = level_for(total_points).max(level);
    LevelChange {
        total_points,
        level: new_level,
        leveled_up: new_level > level,
    }
}

/// Streak after logging a workout on `today`.
///
/// `last_workout` is the date of the most recent workout logged before this
/// one. Yesterday continues the streak, an older date or no prior workout
/// restarts it at 1, and a same-day (or future, on clock skew) workout leaves
/// it where it is.
pub fn next_streak(current_streak: i32, last_workout: Option<NaiveDate>, today: NaiveDate) -> i32 {
    let Some(last) = last_workout else {
        return 1;
    };

    match today.signed_duration_since(last).num_days() {
        days if days <= 0 => current_streak.max(1),
        1 => current_streak + 1,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn points_follow_difficulty_multiplier() {
        assert_eq!(points_for(30, "Easy"), 60);
        assert_eq!(points_for(30, "Medium"), 90);
        assert_eq!(points_for(30, "Hard"), 120);
        assert_eq!(points_for(30, "Intense"), 150);
        assert_eq!(points_for(7, "intense"), 35);
    }

    #[test]
    fn unknown_difficulty_uses_default_multiplier() {
        assert_eq!(points_for(30, "Extreme"), 90);
        assert_eq!(points_for(10, ""), 30);
    }

    #[test]
    fn points_match_formula_for_every_tier() {
        for difficulty in Difficulty::ALL {
            for duration in [1, 15, 45, 90, 1440] {
                let expected =
                    (f64::from(duration) * 2.0 * difficulty.multiplier()).round() as i32;
                assert_eq!(points_for(duration, difficulty.as_str()), expected);
            }
        }
    }

    #[test]
    fn level_is_floor_of_hundreds_plus_one() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(99), 1);
        assert_eq!(level_for(100), 2);
        assert_eq!(level_for(180), 2);
        assert_eq!(level_for(1250), 13);
        assert_eq!(level_for(-5), 1);
    }

    #[test]
    fn points_to_next_level_counts_down() {
        assert_eq!(points_to_next_level(0), 100);
        assert_eq!(points_to_next_level(90), 10);
        assert_eq!(points_to_next_level(100), 100);
    }

    #[test]
    fn add_points_reports_level_up_once() {
        let first = add_points(0, 1, 90);
        assert_eq!(first, LevelChange { total_points: 90, level: 1, leveled_up: false });

        let second = add_points(first.total_points, first.level, 90);
        assert_eq!(second, LevelChange { total_points: 180, level: 2, leveled_up: true });
    }

    #[test]
    fn level_never_decreases() {
        // A stored level above the derived one is kept.
        let change = add_points(50, 4, 10);
        assert_eq!(change.level, 4);
        assert!(!change.leveled_up);

        let mut total = 0;
        let mut level = 1;
        for points in [30, 70, 0, 250, 1, 99] {
            let change = add_points(total, level, points);
            assert!(change.level >= level);
            total = change.total_points;
            level = change.level;
        }
    }

    #[test]
    fn goal_points_floor_the_target() {
        assert_eq!(goal_points(10.0), 100);
        assert_eq!(goal_points(5.9), 50);
        assert_eq!(goal_points(0.5), 0);
    }

    #[test]
    fn huge_totals_do_not_overflow() {
        assert_eq!(goal_points(MAX_GOAL_TARGET), 10_000_000);
        assert_eq!(goal_points(1.0e9), i32::MAX);
        assert_eq!(goal_points(1.0e300), i32::MAX);

        let remaining = points_to_next_level(i32::MAX);
        assert!(remaining > 0 && remaining <= POINTS_PER_LEVEL);
        let capped = add_points(i32::MAX - 5, 1, goal_points(1.0e9));
        assert_eq!(capped.total_points, i32::MAX);
    }

    #[test]
    fn first_workout_starts_streak() {
        assert_eq!(next_streak(0, None, date(2026, 3, 2)), 1);
    }

    #[test]
    fn consecutive_days_increment_streak() {
        let mut streak = 0;
        let mut last = None;
        for day in 1..=5 {
            let today = date(2026, 3, day);
            streak = next_streak(streak, last, today);
            last = Some(today);
            assert_eq!(streak, day as i32);
        }
    }

    #[test]
    fn gap_resets_streak() {
        assert_eq!(next_streak(6, Some(date(2026, 3, 1)), date(2026, 3, 3)), 1);
        assert_eq!(next_streak(6, Some(date(2026, 1, 1)), date(2026, 3, 3)), 1);
    }

    #[test]
    fn same_day_workout_keeps_streak() {
        assert_eq!(next_streak(4, Some(date(2026, 3, 3)), date(2026, 3, 3)), 4);
        assert_eq!(next_streak(0, Some(date(2026, 3, 3)), date(2026, 3, 3)), 1);
    }

    #[test]
    fn streak_crosses_month_boundary() {
        assert_eq!(next_streak(2, Some(date(2026, 2, 28)), date(2026, 3, 1)), 3);
    }
}
