use crate::api;
use crate::services::account_service::{SigninInput, SignupInput};
use crate::services::workout_service::CompleteWorkoutInput;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::auth::signup,
        api::auth::signin,
        api::workouts::complete_workout,
        api::goals::update_goal,
        api::challenges::join_challenge,
    ),
    components(
        schemas(
            SignupInput,
            SigninInput,
            CompleteWorkoutInput,
            api::goals::UpdateGoalRequest,
        )
    ),
    tags(
        (name = "coachsmart", description = "CoachSmart fitness tracking API")
    )
)]
pub struct ApiDoc;
