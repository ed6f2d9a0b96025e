use salvo::{Depot, Request, Response, Router, http::StatusCode, writing::Json, handler};
use serde::{Deserialize, Serialize};

use crate::app::api::respond::{parse_body, render_error};
use crate::config::get_config_from_depot;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;
use roost_core::constants::AUTH_ROUTE_COMPONENT;
use roost_db::model::user::User;
use roost_service::auth::depot::get_user_id_from_depot;
use roost_service::auth::token::issue_token;
use roost_service::user::{self, Registration};

/// ## Summary
/// Registration request payload
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// ## Summary
/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// ## Summary
/// Login response payload
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Public view of an account. The password hash stays behind; the
/// model is not serializable and this struct is the only shape that
/// reaches a response body.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// ## Summary
/// POST /api/auth/register - Register a new account
///
/// ## Side Effects
/// - Creates a user row with the hashed password
///
/// ## Errors
/// Returns HTTP 400 for a malformed body or empty fields
/// Returns HTTP 409 if the email is already registered
/// Returns HTTP 500 if hashing or database operations fail
#[handler]
async fn register(req: &mut Request, depot: &Depot, res: &mut Response) {
    match try_register(req, depot).await {
        Ok(profile) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(profile));
        }
        Err(e) => render_error(res, &e),
    }
}

async fn try_register(req: &mut Request, depot: &Depot) -> AppResult<UserResponse> {
    let body: RegisterRequest = parse_body(req).await?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let created = user::register(
        &mut conn,
        &Registration {
            name: &body.name,
            email: &body.email,
            password: &body.password,
        },
    )
    .await?;

    Ok(created.into())
}

/// ## Summary
/// POST /api/auth/login - Exchange credentials for a session token
///
/// ## Errors
/// Returns HTTP 400 for a malformed body
/// Returns HTTP 401 with one generic message for unknown email and
/// wrong password alike
/// Returns HTTP 500 if signing or database operations fail
#[handler]
async fn login(req: &mut Request, depot: &Depot, res: &mut Response) {
    match try_login(req, depot).await {
        Ok(response) => {
            res.render(Json(response));
        }
        Err(e) => render_error(res, &e),
    }
}

async fn try_login(req: &mut Request, depot: &Depot) -> AppResult<LoginResponse> {
    let body: LoginRequest = parse_body(req).await?;
    let config = get_config_from_depot(depot)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let account = user::verify_credentials(&mut conn, &body.email, &body.password).await?;
    let token = issue_token(&config.auth, account.id)?;

    tracing::info!(user_id = %account.id, "Issued session token");

    Ok(LoginResponse { token })
}

/// ## Summary
/// GET /api/auth/user - The authenticated account's profile
///
/// ## Errors
/// Returns HTTP 401 without a valid bearer token
/// Returns HTTP 404 if the account no longer exists
#[handler]
async fn current_user(depot: &Depot, res: &mut Response) {
    match try_current_user(depot).await {
        Ok(profile) => {
            res.render(Json(profile));
        }
        Err(e) => render_error(res, &e),
    }
}

async fn try_current_user(depot: &Depot) -> AppResult<UserResponse> {
    let user_id = get_user_id_from_depot(depot)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let account = user::find_by_id(&mut conn, user_id).await?;

    Ok(account.into())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(AUTH_ROUTE_COMPONENT)
        .push(Router::with_path("register").post(register))
        .push(Router::with_path("login").post(login))
        .push(Router::with_path("user").get(current_user))
}
