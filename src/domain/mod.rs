//! Domain layer - Pure business rules
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Point arithmetic, level and streak policy, challenge progress rules
//! and the static workout plan catalog live here so they can be tested
//! without a database.

pub mod catalog;
pub mod challenges;
pub mod errors;
pub mod progression;

pub use challenges::{ChallengeType, ProgressOutcome, WorkoutEventContext};
pub use errors::DomainError;
pub use progression::{Difficulty, LevelChange};
