mod app_specific;
mod auth;
mod bookings;
mod properties;
pub mod respond;


use salvo::Router;

use crate::middleware::auth::AuthMiddleware;

// Re-export route constants from core
pub use roost_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, AUTH_ROUTE_COMPONENT, AUTH_ROUTE_PREFIX,
    BOOKINGS_ROUTE_COMPONENT, BOOKINGS_ROUTE_PREFIX, PROPERTIES_ROUTE_COMPONENT,
    PROPERTIES_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router. Every route sits behind the token
/// middleware; public routes simply never ask the depot for a user.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .push(app_specific::routes())
        .push(auth::routes())
        .push(properties::routes())
        .push(bookings::routes())
}
