//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Missing or invalid input, shown back to the user as-is
    #[error("Validation error: {0}")]
    Validation(String),
    /// Resource not found, or not owned by the caller
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Not signed in, bad credentials or an invalid session token
    #[error("Authentication error: {0}")]
    Auth(String),
    /// Uniqueness violation (duplicate signup, challenge joined twice)
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Database/persistence error; the surrounding transaction is rolled back
    #[error("Database error: {0}")]
    Database(String),
    /// Anything else that is our fault (hashing, token signing)
    #[error("Internal error: {0}")]
    Internal(String),
}

// Conversion from SeaORM errors (used in infrastructure and service layers)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        // A UNIQUE index hit means a concurrent request won the race
        if let Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
            return DomainError::Conflict("This record already exists".into());
        }
        DomainError::Database(e.to_string())
    }
}
