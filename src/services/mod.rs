//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.
//! Every state-changing operation that touches more than one table runs in
//! a single database transaction.

pub mod account_service;
pub mod activity_service;
pub mod challenge_service;
pub mod custom_workout_service;
pub mod dashboard_service;
pub mod goal_service;
pub mod stats_service;
pub mod workout_service;
