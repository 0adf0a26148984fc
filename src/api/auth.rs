use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use serde_json::{Value, json};

use crate::api::error::{ApiError, ApiResult};
use crate::api::json::ApiJson;
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::infrastructure::auth::{AuthUser, create_session_token};
use crate::models::{UserDto, user};
use crate::services::account_service::{self, SigninInput, SignupInput};

#[derive(Serialize)]
pub struct SessionResponse {
    token: String,
    user: UserDto,
}

fn open_session(state: &AppState, user: user::Model) -> ApiResult<SessionResponse> {
    let config = state.config();
    let token = create_session_token(
        user.id,
        &user.username,
        &config.jwt_secret,
        config.session_ttl_hours,
    )
    .map_err(DomainError::Internal)?;

    Ok(SessionResponse {
        token,
        user: user.into(),
    })
}

#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupInput,
    responses(
        (status = 201, description = "Account created, session token returned"),
        (status = 400, description = "Missing or invalid field"),
        (status = 409, description = "Username or email already in use")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SignupInput>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let user = account_service::signup(
        state.db(),
        payload,
        state.config().auto_join_challenges,
        Utc::now(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(open_session(&state, user)?)))
}

#[utoipa::path(
    post,
    path = "/signin",
    request_body = SigninInput,
    responses(
        (status = 200, description = "Signed in, session token returned"),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SigninInput>,
) -> ApiResult<Json<SessionResponse>> {
    tracing::info!("Sign-in attempt for: {}", payload.email);
    let user = account_service::signin(state.db(), payload).await?;
    Ok(Json(open_session(&state, user)?))
}

pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Value>> {
    let (user, stats) = account_service::profile(state.db(), auth.user_id).await?;
    Ok(Json(json!({
        "user": UserDto::from(user),
        "stats": stats,
    })))
}

pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, ApiError> {
    account_service::delete_account(state.db(), auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
