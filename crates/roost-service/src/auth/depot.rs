//! Depot helpers for extracting the authenticated user from Salvo requests.
//!
//! The auth middleware verifies the bearer token and stores a
//! [`DepotUser`] under [`depot_keys::AUTHENTICATED_USER`]. Handlers
//! never touch the token themselves.

use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

pub mod depot_keys {
    pub const AUTHENTICATED_USER: &str = "__authenticated_user";
}

/// The requester as established by the auth middleware.
///
/// Carries only the user id; token verification is stateless and does
/// not consult the database, so whether the user row still exists is a
/// question for the handler that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepotUser {
    /// A verified token for this user id.
    User(Uuid),
    /// No credentials, or credentials that did not verify.
    Public,
}

/// Get the authenticated user from the depot.
///
/// ## Errors
///
/// Returns `NotAuthenticated` if no user is found in the depot or if the user is public.
pub fn get_user_from_depot(depot: &salvo::Depot) -> ServiceResult<&DepotUser> {
    depot
        .get::<DepotUser>(depot_keys::AUTHENTICATED_USER)
        .map_err(|_e| ServiceError::NotAuthenticated)
}

/// Get the authenticated user's id from the depot.
///
/// ## Errors
///
/// Returns `NotAuthenticated` if no user is found in the depot or if the user is public.
pub fn get_user_id_from_depot(depot: &salvo::Depot) -> ServiceResult<Uuid> {
    match get_user_from_depot(depot)? {
        DepotUser::User(id) => Ok(*id),
        DepotUser::Public => Err(ServiceError::NotAuthenticated),
    }
}
