//! Ownership based access control.
//!
//! Every mutation of a listing or booking is allowed to exactly one
//! user: the row's owner. There are no roles and no delegation, so the
//! whole policy is an id comparison. Handlers resolve the resource
//! first and check ownership second, which keeps "does not exist"
//! (404) distinct from "exists but is not yours" (403).

use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// Result of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthzResult {
    /// Access is allowed.
    Allowed,
    /// Access is denied.
    Denied,
}

impl AuthzResult {
    /// Returns `true` if access is allowed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Convert to a `Result`, returning `Err(ServiceError::Forbidden)` if denied.
    ///
    /// ## Errors
    ///
    /// Returns `Forbidden` if access is denied.
    pub fn require(self) -> ServiceResult<()> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied => Err(ServiceError::Forbidden),
        }
    }
}

/// ## Summary
/// Checks whether `requester_id` owns the resource owned by `owner_id`.
#[must_use]
pub fn authorize_owner(owner_id: Uuid, requester_id: Uuid) -> AuthzResult {
    if owner_id == requester_id {
        AuthzResult::Allowed
    } else {
        tracing::debug!(
            owner = %owner_id,
            requester = %requester_id,
            "Ownership check denied"
        );
        AuthzResult::Denied
    }
}
