use thiserror::Error;

/// Service layer errors - combines all error types
///
/// The HTTP layer maps each variant onto exactly one status code, so
/// new variants must be added there as well.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] roost_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] roost_core::error::CoreError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Expired token")]
    ExpiredToken,

    #[error("Not authorized")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Signing error: {0}")]
    SigningError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),

    #[error("Diesel error: {0}")]
    DieselError(#[from] diesel::result::Error),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
