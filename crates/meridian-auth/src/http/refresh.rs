//! Token refresh endpoint handler.
//!
//! Exchanges a valid refresh token for a brand-new token pair. The old
//! refresh token is not tracked or invalidated here: tokens are stateless,
//! and single-use refresh semantics would require a consumed-token store
//! in front of this handler.
//!
//! # Example
//!
//! ```ignore
//! POST /auth/refresh
//! Authorization: Bearer <refresh token>
//! ```

use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap, http::header::AUTHORIZATION};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::error::AuthError;
use crate::token::issuer::{TokenIssuer, TokenPair};
use crate::validator::TokenValidator;

/// State required for the refresh endpoint.
#[derive(Clone)]
pub struct RefreshState {
    /// Validator for the presented refresh token.
    pub validator: Arc<TokenValidator>,
    /// Issuer for the replacement pair.
    pub issuer: Arc<TokenIssuer>,
}

impl RefreshState {
    /// Creates a new refresh state.
    #[must_use]
    pub fn new(validator: Arc<TokenValidator>, issuer: Arc<TokenIssuer>) -> Self {
        Self { validator, issuer }
    }
}

/// Refresh endpoint handler.
///
/// Validates the `Authorization` header as a *refresh* token — an access
/// token is rejected here exactly as a refresh token is rejected at the
/// gateway — then issues a fresh pair for the same identity.
///
/// # Errors
///
/// Returns the classified [`AuthError`], which maps to a 401 response for
/// rejected credentials.
pub async fn refresh_handler(
    State(state): State<RefreshState>,
    headers: HeaderMap,
) -> Result<Json<TokenPair>, AuthError> {
    let header = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());
    let now = OffsetDateTime::now_utc();

    let identity = state.validator.validate_refresh(header, now).map_err(|e| {
        debug!(error = %e, "Refresh token rejected");
        e
    })?;

    let pair = state
        .issuer
        .issue_token_pair(&identity.user_id, &identity.roles, now)?;

    info!(user_id = %identity.user_id, "Token pair refreshed");
    Ok(Json(pair))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::jwt::{JwtCodec, SigningKey};
    use axum::http::HeaderValue;
    use time::Duration;

    fn test_state() -> RefreshState {
        let codec = Arc::new(JwtCodec::new(SigningKey::from_secret(
            b"test-secret-at-least-32-bytes-long",
        )));
        let issuer = Arc::new(TokenIssuer::new(
            codec.clone(),
            Duration::minutes(15),
            Duration::days(30),
        ));
        RefreshState::new(Arc::new(TokenValidator::new(codec)), issuer)
    }

    fn auth_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn test_refresh_yields_new_valid_pair() {
        let state = test_state();
        let now = OffsetDateTime::now_utc();
        let refresh = state
            .issuer
            .issue_refresh_token("42", &["user".to_string()], now)
            .unwrap();

        let Json(pair) = refresh_handler(State(state.clone()), auth_headers(&refresh))
            .await
            .unwrap();

        let identity = state
            .validator
            .validate_access(Some(&format!("Bearer {}", pair.access_token)), now)
            .unwrap();
        assert_eq!(identity.user_id, "42");
        assert_eq!(identity.roles, vec!["user".to_string()]);
    }

    #[tokio::test]
    async fn test_access_token_rejected_at_refresh() {
        let state = test_state();
        let now = OffsetDateTime::now_utc();
        let access = state
            .issuer
            .issue_access_token("42", &["user".to_string()], now)
            .unwrap();

        let result = refresh_handler(State(state), auth_headers(&access)).await;
        assert!(matches!(result, Err(AuthError::WrongTokenType { .. })));
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let state = test_state();
        let result = refresh_handler(State(state), HeaderMap::new()).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn test_expired_refresh_token_rejected() {
        let state = test_state();
        let past = OffsetDateTime::now_utc() - Duration::days(31);
        let refresh = state
            .issuer
            .issue_refresh_token("42", &[], past)
            .unwrap();

        let result = refresh_handler(State(state), auth_headers(&refresh)).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }
}
