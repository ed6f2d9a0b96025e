//! The single place where errors become HTTP responses.
//!
//! Every handler and the auth middleware route failures through
//! [`render_error`], so the error-to-status mapping lives here and
//! nowhere else. Internal errors are logged in full and answered with
//! an opaque message.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Request, Response};
use serde::Serialize;

use crate::error::AppError;
use roost_service::error::ServiceError;

/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Success payload for deletions.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

fn status_and_message(err: &AppError) -> (StatusCode, String) {
    match err {
        AppError::ServiceError(service_err) => match service_err {
            ServiceError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServiceError::DuplicateEmail => {
                (StatusCode::CONFLICT, "Email already registered".to_string())
            }
            ServiceError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            ServiceError::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            ServiceError::MalformedToken | ServiceError::ExpiredToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            ),
            ServiceError::Forbidden => (StatusCode::FORBIDDEN, "Not authorized".to_string()),
            ServiceError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            ServiceError::DatabaseError(_)
            | ServiceError::CoreError(_)
            | ServiceError::HashingError(_)
            | ServiceError::SigningError(_)
            | ServiceError::StorageError(_)
            | ServiceError::InvariantViolation(_)
            | ServiceError::DieselError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        },
        AppError::DatabaseError(_) | AppError::CoreError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    }
}

/// ## Summary
/// Renders an error as a JSON response with the mapped status code.
///
/// ## Side Effects
/// Logs internal errors at error level with full detail; the response
/// body never carries it.
pub fn render_error(res: &mut Response, err: &AppError) {
    let (status, message) = status_and_message(err);

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = ?err, "Request failed with internal error");
    } else {
        tracing::debug!(error = %err, status = %status, "Request rejected");
    }

    res.status_code(status);
    res.render(Json(ErrorResponse { error: message }));
}

/// ## Summary
/// Parses the JSON request body, mapping parse failures to a 400
/// validation error.
///
/// ## Errors
/// Returns `ValidationError` if the body is missing or not valid JSON
/// for the expected shape.
pub async fn parse_body<T: serde::de::DeserializeOwned>(req: &mut Request) -> Result<T, AppError> {
    req.parse_json::<T>().await.map_err(|e| {
        tracing::debug!(error = ?e, "Failed to parse request body");
        ServiceError::ValidationError("Invalid request body".to_string()).into()
    })
}

/// ## Summary
/// Extracts a UUID path parameter.
///
/// A missing or malformed id is indistinguishable from an id that
/// matches no row, so both answer 404 for the same resource name.
///
/// ## Errors
/// Returns `NotFound` if the parameter is absent or not a UUID.
pub fn require_id_param(req: &Request, what: &'static str) -> Result<uuid::Uuid, AppError> {
    req.param::<uuid::Uuid>("id")
        .ok_or_else(|| ServiceError::NotFound(what).into())
}
