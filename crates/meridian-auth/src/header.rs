//! Authorization header parsing.
//!
//! Pure string operation that turns the raw header value into the bearer
//! token it carries. The prefix match is exact and case-sensitive:
//! `"bearer "` and `"Token "` are malformed, not merely unconventional.

use crate::error::AuthError;

/// The exact bearer scheme prefix, including the trailing space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the bearer token from a raw `Authorization` header value.
///
/// # Errors
///
/// Returns `AuthError::MissingAuthHeader` if the header is absent or empty,
/// and `AuthError::MalformedAuthHeader` if it does not consist of the exact
/// `Bearer ` prefix followed by at least one character.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let value = match header {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthError::MissingAuthHeader),
    };

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MalformedAuthHeader),
    }
}
