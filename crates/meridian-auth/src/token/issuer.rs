//! Token issuance.
//!
//! [`TokenIssuer`] mints access and refresh tokens for an authenticated
//! identity. Issuance is a pure computation over `(identity, clock value)`
//! plus the configured lifetimes; both halves of a pair are independent, so
//! no partial-failure state exists.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::claims::{Claims, TokenType};
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::token::jwt::JwtCodec;

/// An access/refresh token pair, shaped as the issuance response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived token authorizing direct API access.
    pub access_token: String,

    /// Long-lived token usable only to obtain a new pair.
    pub refresh_token: String,
}

/// Mints signed tokens carrying identity and role claims.
pub struct TokenIssuer {
    codec: Arc<JwtCodec>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    /// Creates an issuer with explicit lifetimes.
    #[must_use]
    pub fn new(codec: Arc<JwtCodec>, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            codec,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Creates an issuer with the lifetimes from [`AuthConfig`].
    #[must_use]
    pub fn from_config(codec: Arc<JwtCodec>, config: &AuthConfig) -> Self {
        Self::new(
            codec,
            Duration::seconds(config.access_token_lifetime.as_secs() as i64),
            Duration::seconds(config.refresh_token_lifetime.as_secs() as i64),
        )
    }

    /// Configured access token lifetime.
    #[must_use]
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// Configured refresh token lifetime.
    #[must_use]
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Issues an access token valid from `now` until `now + access_ttl`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MalformedClaims` if `user_id` is empty, or
    /// `AuthError::Encoding` if signing fails.
    pub fn issue_access_token(
        &self,
        user_id: &str,
        roles: &[String],
        now: OffsetDateTime,
    ) -> Result<String, AuthError> {
        self.issue(user_id, roles, TokenType::Access, self.access_ttl, now)
    }

    /// Issues a refresh token valid from `now` until `now + refresh_ttl`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::issue_access_token`].
    pub fn issue_refresh_token(
        &self,
        user_id: &str,
        roles: &[String],
        now: OffsetDateTime,
    ) -> Result<String, AuthError> {
        self.issue(user_id, roles, TokenType::Refresh, self.refresh_ttl, now)
    }

    /// Issues an access/refresh pair for the same identity and instant.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::issue_access_token`].
    pub fn issue_token_pair(
        &self,
        user_id: &str,
        roles: &[String],
        now: OffsetDateTime,
    ) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(user_id, roles, now)?,
            refresh_token: self.issue_refresh_token(user_id, roles, now)?,
        })
    }

    fn issue(
        &self,
        user_id: &str,
        roles: &[String],
        token_type: TokenType,
        ttl: Duration,
        now: OffsetDateTime,
    ) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, roles.to_vec(), token_type, now, now + ttl)?;
        self.codec.encode(&claims)
    }
}
