//! Token claims model.
//!
//! [`Claims`] is the canonical structure of what a token asserts: who the
//! bearer is, which roles they hold, which kind of token this is, and the
//! validity window. Claims are immutable once constructed; the issuer builds
//! them and the validator consumes them read-only.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AuthError;

/// The two token kinds the protocol distinguishes.
///
/// Access and refresh tokens are structurally identical but semantically
/// distinct; the discriminant is carried in the token itself and checked as
/// an explicit validation stage, never inferred from context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived token authorizing direct API access.
    Access,
    /// Long-lived token usable only to obtain a new token pair.
    Refresh,
}

impl TokenType {
    /// Returns the discriminant as it appears on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The assertions embedded in a signed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Opaque identifier of the authenticated user.
    #[serde(rename = "userId")]
    pub user_id: String,

    /// Role names granted to the user.
    pub roles: Vec<String>,

    /// Token kind discriminant.
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,

    /// Expiration (Unix timestamp, seconds).
    pub exp: i64,
}

impl Claims {
    /// Builds a claims value, enforcing the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MalformedClaims` if `user_id` is empty or the
    /// expiry does not lie strictly after the issue time.
    pub fn new(
        user_id: impl Into<String>,
        roles: Vec<String>,
        token_type: TokenType,
        issued_at: OffsetDateTime,
        expires_at: OffsetDateTime,
    ) -> Result<Self, AuthError> {
        let claims = Self {
            user_id: user_id.into(),
            roles,
            token_type,
            iat: issued_at.unix_timestamp(),
            exp: expires_at.unix_timestamp(),
        };
        if let Some(reason) = claims.invariant_violation() {
            return Err(AuthError::malformed_claims(reason));
        }
        Ok(claims)
    }

    /// Returns the first violated structural invariant, if any.
    ///
    /// The issuer treats a violation as caller misuse (`MalformedClaims`);
    /// the codec treats the same violation on a deserialized payload as a
    /// bad token (`InvalidClaims`).
    pub(crate) fn invariant_violation(&self) -> Option<&'static str> {
        if self.user_id.is_empty() {
            return Some("userId must not be empty");
        }
        if self.exp <= self.iat {
            return Some("expiry must lie after the issue time");
        }
        None
    }

    /// Issued-at as a point in time.
    #[must_use]
    pub fn issued_at(&self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(self.iat).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }

    /// Expiration as a point in time.
    #[must_use]
    pub fn expires_at(&self) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(self.exp).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }

    /// Returns `true` if the token is expired at `now`.
    ///
    /// A token is invalid at the exact expiry instant: `now >= exp` rejects.
    #[must_use]
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now.unix_timestamp() >= self.exp
    }
}
