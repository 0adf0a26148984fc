//! Built-in workout plan.
//!
//! A closed set of workout types, each with a fixed list of suggested
//! exercises, plus the default weekly schedule shown on the dashboard.

use chrono::Weekday;
use serde::Serialize;

use super::progression::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Strength,
    Cardio,
    Hiit,
    Yoga,
    Flexibility,
    Core,
}

/// A suggested exercise inside a workout type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    /// Sets x reps, or a duration for timed moves
    pub prescription: &'static str,
    pub difficulty: Difficulty,
}

const fn exercise(name: &'static str, prescription: &'static str, difficulty: Difficulty) -> Exercise {
    Exercise {
        name,
        prescription,
        difficulty,
    }
}

const STRENGTH: &[Exercise] = &[
    exercise("Push-ups", "3 x 12", Difficulty::Medium),
    exercise("Bodyweight squats", "3 x 15", Difficulty::Easy),
    exercise("Dumbbell rows", "3 x 10", Difficulty::Medium),
    exercise("Lunges", "3 x 12 each leg", Difficulty::Medium),
    exercise("Deadlifts", "4 x 6", Difficulty::Hard),
];

const CARDIO: &[Exercise] = &[
    exercise("Brisk walk", "30 min", Difficulty::Easy),
    exercise("Jog", "20 min", Difficulty::Medium),
    exercise("Cycling", "45 min", Difficulty::Medium),
    exercise("Jump rope", "10 x 1 min", Difficulty::Hard),
];

const HIIT: &[Exercise] = &[
    exercise("Burpees", "4 x 40 s on / 20 s off", Difficulty::Intense),
    exercise("Mountain climbers", "4 x 40 s on / 20 s off", Difficulty::Hard),
    exercise("Jump squats", "4 x 30 s on / 30 s off", Difficulty::Hard),
    exercise("Sprint intervals", "8 x 30 s", Difficulty::Intense),
];

const YOGA: &[Exercise] = &[
    exercise("Sun salutation", "5 rounds", Difficulty::Easy),
    exercise("Warrior flow", "10 min", Difficulty::Medium),
    exercise("Balance series", "10 min", Difficulty::Medium),
];

const FLEXIBILITY: &[Exercise] = &[
    exercise("Hamstring stretch", "3 x 30 s", Difficulty::Easy),
    exercise("Hip opener", "3 x 45 s", Difficulty::Easy),
    exercise("Shoulder mobility", "2 x 10", Difficulty::Easy),
];

const CORE: &[Exercise] = &[
    exercise("Plank", "3 x 45 s", Difficulty::Medium),
    exercise("Dead bug", "3 x 12", Difficulty::Easy),
    exercise("Russian twists", "3 x 20", Difficulty::Medium),
    exercise("Hanging leg raises", "3 x 10", Difficulty::Hard),
];

impl WorkoutType {
    pub const ALL: [WorkoutType; 6] = [
        WorkoutType::Strength,
        WorkoutType::Cardio,
        WorkoutType::Hiit,
        WorkoutType::Yoga,
        WorkoutType::Flexibility,
        WorkoutType::Core,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutType::Strength => "strength",
            WorkoutType::Cardio => "cardio",
            WorkoutType::Hiit => "hiit",
            WorkoutType::Yoga => "yoga",
            WorkoutType::Flexibility => "flexibility",
            WorkoutType::Core => "core",
        }
    }

    pub fn exercises(self) -> &'static [Exercise] {
        match self {
            WorkoutType::Strength => STRENGTH,
            WorkoutType::Cardio => CARDIO,
            WorkoutType::Hiit => HIIT,
            WorkoutType::Yoga => YOGA,
            WorkoutType::Flexibility => FLEXIBILITY,
            WorkoutType::Core => CORE,
        }
    }
}

/// One day of the weekly plan. `None` is a rest day.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlannedDay {
    pub weekday: &'static str,
    pub workout_type: Option<WorkoutType>,
    pub duration_minutes: i32,
}

/// Default plan for a day of the week.
pub fn scheduled_for(day: Weekday) -> Option<(WorkoutType, i32)> {
    match day {
        Weekday::Mon => Some((WorkoutType::Strength, 45)),
        Weekday::Tue => Some((WorkoutType::Cardio, 30)),
        Weekday::Wed => Some((WorkoutType::Core, 20)),
        Weekday::Thu => Some((WorkoutType::Hiit, 25)),
        Weekday::Fri => Some((WorkoutType::Strength, 45)),
        Weekday::Sat => Some((WorkoutType::Yoga, 40)),
        Weekday::Sun => None,
    }
}

/// The full week starting on Monday.
pub fn weekly_schedule() -> Vec<PlannedDay> {
    const WEEK: [(Weekday, &str); 7] = [
        (Weekday::Mon, "Monday"),
        (Weekday::Tue, "Tuesday"),
        (Weekday::Wed, "Wednesday"),
        (Weekday::Thu, "Thursday"),
        (Weekday::Fri, "Friday"),
        (Weekday::Sat, "Saturday"),
        (Weekday::Sun, "Sunday"),
    ];

    WEEK.into_iter()
        .map(|(day, name)| {
            let planned = scheduled_for(day);
            PlannedDay {
                weekday: name,
                workout_type: planned.map(|(t, _)| t),
                duration_minutes: planned.map(|(_, d)| d).unwrap_or(0),
            }
        })
        .collect()
}
