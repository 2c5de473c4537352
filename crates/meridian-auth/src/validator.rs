//! Token validation pipeline.
//!
//! [`TokenValidator`] turns a raw `Authorization` header value into an
//! authenticated [`Identity`] or a classified rejection. Every validation
//! attempt is a single terminal pass — header parse, signature, claims,
//! expiry, then the token-kind check — with no state carried between calls.
//!
//! The kind check is a security invariant, not an incidental stage: an
//! access token must never be accepted where a refresh token is required,
//! and vice versa, or short-lived and long-lived credentials would become
//! interchangeable.

use std::sync::Arc;

use time::OffsetDateTime;

use crate::claims::TokenType;
use crate::error::AuthError;
use crate::header::extract_bearer_token;
use crate::identity::Identity;
use crate::token::jwt::JwtCodec;

/// Validates bearer tokens against the process-wide verification key.
///
/// Cheap to share: holds only an `Arc` to the codec and mutates nothing.
#[derive(Clone)]
pub struct TokenValidator {
    codec: Arc<JwtCodec>,
}

impl TokenValidator {
    /// Creates a validator over the given codec.
    #[must_use]
    pub fn new(codec: Arc<JwtCodec>) -> Self {
        Self { codec }
    }

    /// Validates an access token and returns the identity it asserts.
    ///
    /// # Errors
    ///
    /// Returns the classified [`AuthError`] of the first failing stage;
    /// `AuthError::WrongTokenType` if the token is a refresh token.
    pub fn validate_access(
        &self,
        header: Option<&str>,
        now: OffsetDateTime,
    ) -> Result<Identity, AuthError> {
        self.validate(header, TokenType::Access, now)
    }

    /// Validates a refresh token and returns the identity it asserts.
    ///
    /// # Errors
    ///
    /// Returns the classified [`AuthError`] of the first failing stage;
    /// `AuthError::WrongTokenType` if the token is an access token.
    pub fn validate_refresh(
        &self,
        header: Option<&str>,
        now: OffsetDateTime,
    ) -> Result<Identity, AuthError> {
        self.validate(header, TokenType::Refresh, now)
    }

    fn validate(
        &self,
        header: Option<&str>,
        expected: TokenType,
        now: OffsetDateTime,
    ) -> Result<Identity, AuthError> {
        let token = extract_bearer_token(header)?;
        let claims = self.codec.decode(token, now)?;

        if claims.token_type != expected {
            return Err(AuthError::wrong_token_type(expected));
        }

        Ok(Identity::from(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::issuer::TokenIssuer;
    use crate::token::jwt::SigningKey;
    use time::Duration;
    use time::macros::datetime;

    const T0: OffsetDateTime = datetime!(2026-01-15 10:00:00 UTC);

    fn fixture() -> (TokenIssuer, TokenValidator) {
        let codec = Arc::new(JwtCodec::new(SigningKey::from_secret(
            b"test-secret-at-least-32-bytes-long",
        )));
        let issuer = TokenIssuer::new(codec.clone(), Duration::minutes(15), Duration::days(30));
        (issuer, TokenValidator::new(codec))
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    #[test]
    fn test_valid_access_token_yields_identity() {
        let (issuer, validator) = fixture();
        let roles = vec!["user".to_string()];
        let token = issuer.issue_access_token("42", &roles, T0).unwrap();

        let identity = validator.validate_access(Some(&bearer(&token)), T0).unwrap();
        assert_eq!(identity.user_id, "42");
        assert_eq!(identity.roles, roles);
    }

    #[test]
    fn test_type_separation_both_directions() {
        let (issuer, validator) = fixture();
        let roles = vec!["user".to_string()];
        let access = issuer.issue_access_token("42", &roles, T0).unwrap();
        let refresh = issuer.issue_refresh_token("42", &roles, T0).unwrap();

        assert!(matches!(
            validator.validate_access(Some(&bearer(&refresh)), T0),
            Err(AuthError::WrongTokenType {
                expected: TokenType::Access
            })
        ));
        assert!(matches!(
            validator.validate_refresh(Some(&bearer(&access)), T0),
            Err(AuthError::WrongTokenType {
                expected: TokenType::Refresh
            })
        ));
    }

    #[test]
    fn test_header_failures_propagate() {
        let (_, validator) = fixture();

        assert!(matches!(
            validator.validate_access(None, T0),
            Err(AuthError::MissingAuthHeader)
        ));
        assert!(matches!(
            validator.validate_access(Some("bearer abc"), T0),
            Err(AuthError::MalformedAuthHeader)
        ));
    }

    #[test]
    fn test_expired_access_token_rejected() {
        let (issuer, validator) = fixture();
        let token = issuer
            .issue_access_token("42", &["user".to_string()], T0)
            .unwrap();

        let at_expiry = T0 + Duration::minutes(15);
        assert!(matches!(
            validator.validate_access(Some(&bearer(&token)), at_expiry),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_refresh_token_outlives_access_token() {
        let (issuer, validator) = fixture();
        let pair = issuer
            .issue_token_pair("42", &["user".to_string()], T0)
            .unwrap();

        // One second past access expiry the refresh token still validates.
        let later = T0 + Duration::minutes(15) + Duration::seconds(1);
        assert!(matches!(
            validator.validate_access(Some(&bearer(&pair.access_token)), later),
            Err(AuthError::TokenExpired)
        ));
        assert!(
            validator
                .validate_refresh(Some(&bearer(&pair.refresh_token)), later)
                .is_ok()
        );
    }

    #[test]
    fn test_garbage_token_rejected() {
        let (_, validator) = fixture();
        assert!(matches!(
            validator.validate_access(Some("Bearer not.a.token"), T0),
            Err(AuthError::TokenMalformed { .. })
        ));
    }
}
