//! Gateway enforcement filter.
//!
//! Axum middleware that authenticates every inbound request before it is
//! forwarded downstream. Validation is re-executed per request — tokens are
//! stateless, re-verification is cheap, and caching a result would only add
//! staleness.
//!
//! On success the validated identity travels two ways:
//!
//! - as the trusted `x-user-id` / `x-user-roles` headers on the forwarded
//!   request, for services that only read headers;
//! - as an [`Identity`] request extension, for axum handlers in-process.
//!
//! Any identity headers the *client* sent are stripped before the trusted
//! values are written, so a caller can never smuggle an identity past the
//! filter.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;
use tracing::debug;

use meridian_auth::{AuthError, AuthState, Identity};

/// Trusted header carrying the authenticated user id downstream.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Trusted header carrying the comma-joined role names downstream.
pub const USER_ROLES_HEADER: &str = "x-user-roles";

/// Per-request enforcement middleware.
///
/// Use with [`axum::middleware::from_fn_with_state`]:
///
/// ```ignore
/// let app = Router::new()
///     .route("/orders", get(orders_handler))
///     .layer(middleware::from_fn_with_state(auth_state, enforce));
/// ```
pub async fn enforce(
    State(state): State<AuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(ToString::to_string);

    let identity = match state
        .validator
        .validate_access(header.as_deref(), OffsetDateTime::now_utc())
    {
        Ok(identity) => identity,
        Err(e) => {
            debug!(error = %e, path = %req.uri().path(), "Request rejected at gateway");
            return e.into_response();
        }
    };

    if let Err(e) = attach_identity(&mut req, &identity) {
        return e.into_response();
    }

    debug!(
        user_id = %identity.user_id,
        path = %req.uri().path(),
        "Request admitted"
    );
    req.extensions_mut().insert(identity);

    next.run(req).await
}

/// Replaces any client-supplied identity headers with the trusted values
/// derived from the validated token.
fn attach_identity(req: &mut Request<Body>, identity: &Identity) -> Result<(), AuthError> {
    let headers = req.headers_mut();
    headers.remove(USER_ID_HEADER);
    headers.remove(USER_ROLES_HEADER);

    let user_id = HeaderValue::from_str(&identity.user_id)
        .map_err(|_| AuthError::encoding("user id is not header-safe"))?;
    let roles = HeaderValue::from_str(&identity.roles.join(","))
        .map_err(|_| AuthError::encoding("role names are not header-safe"))?;

    headers.insert(USER_ID_HEADER, user_id);
    headers.insert(USER_ROLES_HEADER, roles);
    Ok(())
}
