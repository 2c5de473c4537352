//! # meridian-auth
//!
//! Token issuance and validation for the Meridian platform.
//!
//! This crate provides the bearer-token protocol shared by the issuing
//! service and the perimeter gateway: short-lived access tokens and
//! longer-lived refresh tokens carrying identity and role claims, minted
//! and verified against a single process-wide signing key.
//!
//! Validation is stateless and deterministic: every operation is a pure
//! function of the token string, the key, and a clock value, so concurrent
//! requests share nothing mutable and identical inputs always produce
//! identical outcomes.
//!
//! ## Modules
//!
//! - [`claims`] - Claims model and token kind discriminant
//! - [`config`] - Lifetimes and signing key configuration
//! - [`error`] - Classified error taxonomy
//! - [`header`] - `Authorization` header parsing
//! - [`identity`] - Authenticated identity context
//! - [`token`] - JWT codec and token issuance
//! - [`validator`] - Access/refresh validation pipeline
//! - [`middleware`] - Axum extractor and error response mapping
//! - [`http`] - Axum handlers (token refresh)

pub mod claims;
pub mod config;
pub mod error;
pub mod header;
pub mod http;
pub mod identity;
pub mod middleware;
pub mod token;
pub mod validator;

pub use claims::{Claims, TokenType};
pub use config::{AuthConfig, ConfigError, SigningConfig};
pub use error::AuthError;
pub use header::{BEARER_PREFIX, extract_bearer_token};
pub use http::{RefreshState, refresh_handler};
pub use identity::Identity;
pub use middleware::{AuthState, RequireAuth};
pub use token::{JwtCodec, SigningAlgorithm, SigningKey, TokenIssuer, TokenPair};
pub use validator::TokenValidator;

/// Type alias for authentication results.
pub type AuthResult<T> = Result<T, AuthError>;
