//! Account Service - signup, signin and account lifecycle

use chrono::{DateTime, Utc};
use sea_orm::*;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::infrastructure::auth::{hash_password, verify_password};
use crate::models::activity::ActivityKind;
use crate::models::user::{self, Entity as User};
use crate::models::user_stats::{self, Entity as UserStats};
use crate::services::{activity_service, challenge_service};
use crate::utils::time::to_timestamp;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SigninInput {
    pub email: String,
    pub password: String,
}

fn validate_signup(input: &SignupInput) -> Result<(String, String), DomainError> {
    let username = input.username.trim();
    let email = input.email.trim().to_lowercase();

    if username.is_empty() || email.is_empty() || input.password.is_empty() {
        return Err(DomainError::Validation("All fields are required".into()));
    }
    if username.chars().count() > 30 {
        return Err(DomainError::Validation(
            "Username must be at most 30 characters".into(),
        ));
    }
    if !email.contains('@') {
        return Err(DomainError::Validation("Please enter a valid email".into()));
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if input.password != input.confirm_password {
        return Err(DomainError::Validation("Passwords do not match".into()));
    }

    Ok((username.to_owned(), email))
}

/// Create a user with zeroed stats. Optionally joins the whole challenge catalog.
pub async fn signup(
    db: &DatabaseConnection,
    input: SignupInput,
    auto_join_challenges: bool,
    now: DateTime<Utc>,
) -> Result<user::Model, DomainError> {
    let (username, email) = validate_signup(&input)?;
    let password_hash = hash_password(&input.password).map_err(DomainError::Internal)?;
    let stamp = to_timestamp(now);

    let txn = db.begin().await?;

    if User::find()
        .filter(user::Column::Username.eq(&username))
        .one(&txn)
        .await?
        .is_some()
    {
        return Err(DomainError::Conflict("Username already taken".into()));
    }
    if User::find()
        .filter(user::Column::Email.eq(&email))
        .one(&txn)
        .await?
        .is_some()
    {
        return Err(DomainError::Conflict("Email already registered".into()));
    }

    let user = user::ActiveModel {
        username: Set(username),
        email: Set(email),
        password_hash: Set(password_hash),
        created_at: Set(stamp.clone()),
        updated_at: Set(stamp.clone()),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| match DomainError::from(e) {
        DomainError::Conflict(_) => {
            DomainError::Conflict("Username or email already in use".into())
        }
        other => other,
    })?;

    user_stats::ActiveModel {
        user_id: Set(user.id),
        current_streak: Set(0),
        longest_streak: Set(0),
        total_workouts: Set(0),
        total_time_minutes: Set(0),
        total_points: Set(0),
        level: Set(1),
        updated_at: Set(stamp.clone()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if auto_join_challenges {
        let joined = challenge_service::join_all(&txn, user.id, &stamp).await?;
        tracing::debug!("Auto-joined {} challenges for user {}", joined, user.id);
    }

    activity_service::record(
        &txn,
        user.id,
        ActivityKind::Welcome,
        "Welcome to CoachSmart!".to_owned(),
        "Log your first workout to start a streak".to_owned(),
        0,
        &stamp,
    )
    .await?;

    txn.commit().await?;
    tracing::info!("New user signed up: {}", user.username);

    Ok(user)
}

/// Check credentials. Unknown email and wrong password are indistinguishable.
pub async fn signin(db: &DatabaseConnection, input: SigninInput) -> Result<user::Model, DomainError> {
    let invalid = || DomainError::Auth("Invalid email or password".into());
    let email = input.email.trim().to_lowercase();

    if email.is_empty() || input.password.is_empty() {
        return Err(DomainError::Validation(
            "Email and password are required".into(),
        ));
    }

    let Some(user) = User::find()
        .filter(user::Column::Email.eq(&email))
        .one(db)
        .await?
    else {
        tracing::warn!("Sign-in attempt for unknown email");
        return Err(invalid());
    };

    match verify_password(&input.password, &user.password_hash) {
        Ok(true) => {
            tracing::info!("User signed in: {}", user.username);
            Ok(user)
        }
        Ok(false) => {
            tracing::warn!("Password verification failed for user: {}", user.username);
            Err(invalid())
        }
        Err(e) => {
            tracing::error!("Stored hash unreadable for user {}: {}", user.id, e);
            Err(invalid())
        }
    }
}

pub async fn profile(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<(user::Model, user_stats::Model), DomainError> {
    let user = User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound("User"))?;
    let stats = UserStats::find()
        .filter(user_stats::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or(DomainError::NotFound("User"))?;
    Ok((user, stats))
}

/// Delete the user; every owned row goes with it through cascading foreign keys.
pub async fn delete_account(db: &DatabaseConnection, user_id: i32) -> Result<(), DomainError> {
    let result = User::delete_by_id(user_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(DomainError::NotFound("User"));
    }
    tracing::info!("Deleted account {}", user_id);
    Ok(())
}
