//! Authentication error types.
//!
//! This module defines every failure the token protocol can produce. Each
//! error is classified at the point of detection and propagated unchanged to
//! the caller; none of them are retryable (a cryptographic or expiry failure
//! cannot succeed without new input).

use crate::claims::TokenType;

/// Errors that can occur while issuing or validating tokens.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The authorization header is absent or empty.
    #[error("Missing authorization header")]
    MissingAuthHeader,

    /// The authorization header does not carry a `Bearer ` token.
    #[error("Malformed authorization header")]
    MalformedAuthHeader,

    /// The token string is structurally invalid (wrong number of segments,
    /// undecodable segment).
    #[error("Malformed token: {message}")]
    TokenMalformed {
        /// Description of the structural problem.
        message: String,
    },

    /// The token signature does not verify against the configured key.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The token payload is missing required claims or they do not parse.
    #[error("Invalid claims: {message}")]
    InvalidClaims {
        /// Description of why the claims are invalid.
        message: String,
    },

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// A token of the wrong kind was presented (access where refresh is
    /// required, or vice versa).
    #[error("Wrong token type, expected {expected}")]
    WrongTokenType {
        /// The token kind the operation requires.
        expected: TokenType,
    },

    /// The issuer was given identity input that cannot form valid claims.
    /// Not expected from well-behaved callers.
    #[error("Malformed claims: {message}")]
    MalformedClaims {
        /// Description of the invalid input.
        message: String,
    },

    /// Token encoding failed.
    #[error("Failed to encode token: {message}")]
    Encoding {
        /// Description of the encoding error.
        message: String,
    },

    /// The signing key material is unusable.
    #[error("Invalid key: {message}")]
    InvalidKey {
        /// Description of why the key is invalid.
        message: String,
    },
}

impl AuthError {
    /// Creates a new `TokenMalformed` error.
    #[must_use]
    pub fn token_malformed(message: impl Into<String>) -> Self {
        Self::TokenMalformed {
            message: message.into(),
        }
    }

    /// Creates a new `InvalidClaims` error.
    #[must_use]
    pub fn invalid_claims(message: impl Into<String>) -> Self {
        Self::InvalidClaims {
            message: message.into(),
        }
    }

    /// Creates a new `WrongTokenType` error.
    #[must_use]
    pub fn wrong_token_type(expected: TokenType) -> Self {
        Self::WrongTokenType { expected }
    }

    /// Creates a new `MalformedClaims` error.
    #[must_use]
    pub fn malformed_claims(message: impl Into<String>) -> Self {
        Self::MalformedClaims {
            message: message.into(),
        }
    }

    /// Creates a new `Encoding` error.
    #[must_use]
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Creates a new `InvalidKey` error.
    #[must_use]
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey {
            message: message.into(),
        }
    }

    /// Returns `true` if this error rejects a presented credential
    /// (surfaced to clients as a 401-class outcome).
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::MissingAuthHeader
                | Self::MalformedAuthHeader
                | Self::TokenMalformed { .. }
                | Self::InvalidSignature
                | Self::InvalidClaims { .. }
                | Self::TokenExpired
                | Self::WrongTokenType { .. }
        )
    }

    /// Returns `true` if this error indicates a server-side fault rather
    /// than a bad credential.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        !self.is_rejection()
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            ErrorKind::MissingRequiredClaim(_)
            | ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::InvalidSubject => Self::invalid_claims(err.to_string()),
            ErrorKind::InvalidRsaKey(_) | ErrorKind::InvalidEcdsaKey | ErrorKind::InvalidKeyFormat => {
                Self::invalid_key(err.to_string())
            }
            // InvalidToken, undecodable segments, algorithm-header problems:
            // all structural.
            _ => Self::token_malformed(err.to_string()),
        }
    }
}
