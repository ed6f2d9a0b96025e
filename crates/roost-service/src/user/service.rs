//! Account service.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use roost_db::db::connection::DbConnection;
use roost_db::db::functions::lower;
use roost_db::db::schema::user;
use roost_db::model::user::{NewUser, User};

use crate::auth::password::{hash_password, verify_password};
use crate::error::{ServiceError, ServiceResult};

/// Context for registering a new account.
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

fn validate(registration: &Registration<'_>) -> ServiceResult<()> {
    if registration.name.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    if registration.email.trim().is_empty() || !registration.email.contains('@') {
        return Err(ServiceError::ValidationError(
            "email must be a valid address".to_string(),
        ));
    }
    if registration.password.is_empty() {
        return Err(ServiceError::ValidationError(
            "password must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// ## Summary
/// Registers a new account with a freshly hashed password.
///
/// Uniqueness of the address rests on the database's unique index over
/// `lower(email)`. There is no prior existence check: two concurrent
/// registrations for the same address race at the insert, and exactly
/// one of them wins.
///
/// ## Side Effects
/// - Creates the user record
///
/// ## Errors
/// Returns `ValidationError` for empty fields, `DuplicateEmail` if the
/// address is already registered, and `HashingError` if hashing fails.
#[tracing::instrument(skip_all, fields(email = registration.email))]
pub async fn register(
    conn: &mut DbConnection<'_>,
    registration: &Registration<'_>,
) -> ServiceResult<User> {
    validate(registration)?;

    let password_hash = hash_password(registration.password)?;

    let new_user = NewUser {
        id: Uuid::now_v7(),
        name: registration.name,
        email: registration.email,
        password_hash: &password_hash,
    };

    let created = diesel::insert_into(user::table)
        .values(&new_user)
        .returning(User::as_select())
        .get_result(conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => ServiceError::DuplicateEmail,
            other => ServiceError::DieselError(other),
        })?;

    tracing::info!(user_id = %created.id, "Registered new account");

    Ok(created)
}

/// ## Summary
/// Looks up an account by email address, case-insensitively.
///
/// ## Errors
/// Returns database errors from the lookup.
pub async fn find_by_email(
    conn: &mut DbConnection<'_>,
    email: &str,
) -> ServiceResult<Option<User>> {
    let account = user::table
        .filter(lower(user::email).eq(email.to_lowercase()))
        .select(User::as_select())
        .first(conn)
        .await
        .optional()?;

    Ok(account)
}

/// ## Summary
/// Looks up an account by id.
///
/// ## Errors
/// Returns `NotFound` if no account has this id.
pub async fn find_by_id(conn: &mut DbConnection<'_>, id: Uuid) -> ServiceResult<User> {
    user::table
        .find(id)
        .select(User::as_select())
        .first(conn)
        .await
        .optional()?
        .ok_or(ServiceError::NotFound("User"))
}

/// ## Summary
/// Verifies an email and password pair, returning the account on
/// success.
///
/// An unknown address and a wrong password both collapse into
/// `InvalidCredentials`; callers cannot learn which half failed. The
/// log keeps the distinction.
///
/// ## Errors
/// Returns `InvalidCredentials` on any mismatch and `HashingError` if
/// the stored digest cannot be parsed.
#[tracing::instrument(skip_all, fields(email))]
pub async fn verify_credentials(
    conn: &mut DbConnection<'_>,
    email: &str,
    password: &str,
) -> ServiceResult<User> {
    let Some(account) = find_by_email(conn, email).await? else {
        tracing::debug!("Login attempt for unknown email");
        return Err(ServiceError::InvalidCredentials);
    };

    if verify_password(password, &account.password_hash)? {
        Ok(account)
    } else {
        tracing::debug!(user_id = %account.id, "Login attempt with wrong password");
        Err(ServiceError::InvalidCredentials)
    }
}
