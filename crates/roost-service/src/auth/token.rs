use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use roost_core::config::AuthConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// Claims carried by a session token.
///
/// The token is the whole session: no server side state exists, so a
/// token is valid exactly when its signature checks out and `exp` is
/// still in the future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's id.
    pub sub: Uuid,
    /// Unix timestamp the token was issued at.
    pub iat: i64,
    /// Unix timestamp the token expires at.
    pub exp: i64,
}

/// ## Summary
/// Issues a signed session token for `user_id`, expiring
/// `auth.lifetime` seconds from now.
///
/// ## Errors
/// Returns [`ServiceError::SigningError`] if signing fails.
pub fn issue_token(auth: &AuthConfig, user_id: Uuid) -> ServiceResult<String> {
    let now = chrono::Utc::now().timestamp();
    let lifetime = i64::try_from(auth.lifetime).unwrap_or(i64::MAX);

    let claims = Claims {
        sub: user_id,
        iat: now,
        exp: now.saturating_add(lifetime),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.secret.as_bytes()),
    )
    .map_err(|e| ServiceError::SigningError(format!("Failed to sign token: {e}")))
}

/// ## Summary
/// Verifies a session token and returns its claims.
///
/// Expiry is checked with zero leeway; a token is either live or it
/// is not.
///
/// ## Errors
/// Returns [`ServiceError::ExpiredToken`] for a well-formed token past
/// its expiry and [`ServiceError::MalformedToken`] for everything else
/// (bad signature, garbage input, wrong algorithm).
pub fn verify_token(auth: &AuthConfig, token: &str) -> ServiceResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => ServiceError::ExpiredToken,
        _ => {
            tracing::debug!("Token rejected: {e}");
            ServiceError::MalformedToken
        }
    })
}
