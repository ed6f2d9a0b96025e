use salvo::Depot;
use tracing::error;

use crate::app::api::respond::render_error;
use crate::config::get_config_from_depot;
use roost_service::auth::depot::{DepotUser, depot_keys};
use roost_service::auth::token::verify_token;
use roost_service::error::ServiceError;

/// Extracts the token from a `Bearer` authorization header value.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if !scheme.eq_ignore_ascii_case("bearer") || parts.next().is_some() {
        return None;
    }
    Some(token)
}

/// ## Summary
/// Authentication middleware: verifies the bearer token and stores the
/// requester in the depot.
///
/// Verification is stateless; no database access happens here. A
/// request without credentials proceeds as [`DepotUser::Public`] so
/// public routes keep working, and protected handlers reject it when
/// they ask for a user id. A request that does present a token must
/// present a valid one: malformed or expired tokens are answered with
/// 401 immediately, on public and protected routes alike.
///
/// ## Side Effects
/// Inserts the requester into the depot for downstream handlers.
///
/// ## Errors
/// Returns HTTP 401 for a token that fails verification and HTTP 500
/// if the configuration is missing from the depot.
pub struct AuthMiddleware;

#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        if req.method() == salvo::http::Method::OPTIONS {
            depot.insert(depot_keys::AUTHENTICATED_USER, DepotUser::Public);
            return;
        }

        let Some(header) = req
            .headers()
            .get(salvo::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
        else {
            tracing::trace!("No credentials presented, treating as public");
            depot.insert(depot_keys::AUTHENTICATED_USER, DepotUser::Public);
            return;
        };

        let Some(token) = bearer_token(header) else {
            tracing::debug!("Authorization header is not a bearer token");
            render_error(res, &ServiceError::MalformedToken.into());
            ctrl.skip_rest();
            return;
        };

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        match verify_token(&config.auth, token) {
            Ok(claims) => {
                tracing::debug!(user_id = %claims.sub, "Token verified");
                depot.insert(depot_keys::AUTHENTICATED_USER, DepotUser::User(claims.sub));
            }
            Err(e) => {
                tracing::debug!(reason = %e, "Token rejected");
                render_error(res, &e.into());
                ctrl.skip_rest();
            }
        }
    }
}
