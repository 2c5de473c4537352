//! Bearer token authentication extractor.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use meridian_auth::middleware::{AuthState, RequireAuth};
//!
//! async fn protected_handler(RequireAuth(identity): RequireAuth) -> String {
//!     format!("Hello, {}!", identity.user_id)
//! }
//!
//! let app = Router::new()
//!     .route("/protected", get(protected_handler))
//!     .with_state(auth_state);
//! ```

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use time::OffsetDateTime;

use crate::error::AuthError;
use crate::identity::Identity;
use crate::validator::TokenValidator;

/// State required for bearer token authentication.
///
/// Include this in the application state and expose it to the extractor via
/// `FromRef`:
///
/// ```ignore
/// #[derive(Clone)]
/// struct AppState {
///     auth: AuthState,
///     // ... other state
/// }
///
/// impl FromRef<AppState> for AuthState {
///     fn from_ref(state: &AppState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthState {
    /// Shared token validator.
    pub validator: Arc<TokenValidator>,
}

impl AuthState {
    /// Creates a new auth state.
    #[must_use]
    pub fn new(validator: Arc<TokenValidator>) -> Self {
        Self { validator }
    }
}

/// Axum extractor that validates the access token on a request and yields
/// the authenticated [`Identity`].
///
/// Validation is re-executed on every request; tokens are stateless, so
/// there is nothing to cache and nothing to go stale.
pub struct RequireAuth(pub Identity);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let identity = auth_state
            .validator
            .validate_access(header, OffsetDateTime::now_utc())
            .map_err(|e| {
                tracing::debug!(error = %e, path = %parts.uri.path(), "Access token rejected");
                e
            })?;

        tracing::debug!(user_id = %identity.user_id, "Access token validated");
        Ok(RequireAuth(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::issuer::TokenIssuer;
    use crate::token::jwt::{JwtCodec, SigningKey};
    use axum::http::Request;
    use time::Duration;

    fn fixture() -> (TokenIssuer, AuthState) {
        let codec = Arc::new(JwtCodec::new(SigningKey::from_secret(
            b"test-secret-at-least-32-bytes-long",
        )));
        let issuer = TokenIssuer::new(codec.clone(), Duration::minutes(15), Duration::days(30));
        (issuer, AuthState::new(Arc::new(TokenValidator::new(codec))))
    }

    fn parts_with_header(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/orders");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_extracts_identity_from_valid_token() {
        let (issuer, state) = fixture();
        let token = issuer
            .issue_access_token("42", &["user".to_string()], OffsetDateTime::now_utc())
            .unwrap();

        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));
        let RequireAuth(identity) = RequireAuth::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert_eq!(identity.user_id, "42");
        assert!(identity.has_role("user"));
    }

    #[tokio::test]
    async fn test_rejects_missing_header() {
        let (_, state) = fixture();
        let mut parts = parts_with_header(None);

        let result = RequireAuth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn test_rejects_refresh_token() {
        let (issuer, state) = fixture();
        let token = issuer
            .issue_refresh_token("42", &[], OffsetDateTime::now_utc())
            .unwrap();

        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));
        let result = RequireAuth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::WrongTokenType { .. })));
    }
}
