pub mod auth;
pub mod challenges;
pub mod dashboard;
pub mod error;
pub mod goals;
pub mod health;
pub mod json;
pub mod plan;
pub mod workouts;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Accounts
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin))
        .route("/me", get(auth::me))
        .route("/account", delete(auth::delete_account))
        // Dashboard & feed
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/activities", get(dashboard::list_activities))
        // Workouts
        .route("/complete-workout", post(workouts::complete_workout))
        .route("/workouts", get(workouts::list_workouts))
        .route("/custom-workouts", get(workouts::list_custom_workouts))
        .route(
            "/create-custom-workout",
            post(workouts::create_custom_workout),
        )
        .route(
            "/delete-custom-workout/:id",
            post(workouts::delete_custom_workout),
        )
        // Goals
        .route("/goals", get(goals::list_goals))
        .route("/add-goal", post(goals::add_goal))
        .route("/update-goal/:id", post(goals::update_goal))
        .route("/delete-goal/:id", post(goals::delete_goal))
        // Challenges
        .route("/challenges", get(challenges::list_challenges))
        .route("/join-challenge/:id", post(challenges::join_challenge))
        // Workout plan catalog
        .route("/workout-plan", get(plan::workout_plan))
        .route("/exercises/:workout_type", get(plan::list_exercises))
        .with_state(state)
}
