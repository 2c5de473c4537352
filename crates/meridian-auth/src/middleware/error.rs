//! Error response mapping.
//!
//! Implements `IntoResponse` for [`AuthError`] so rejections short-circuit
//! straight out of extractors, handlers, and the gateway filter. Clients
//! only ever see the coarse classification; variant detail (signature
//! specifics, claim names, key problems) is logged server-side and never
//! serialized into a response.

use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = error_details(&self);

        if self.is_internal() {
            tracing::error!(error = %self, "Internal authentication error");
        }

        let body = json!({
            "error": error_code,
            "error_description": message,
        });

        let mut headers = HeaderMap::new();
        if status == StatusCode::UNAUTHORIZED {
            let www_auth = build_www_authenticate_header(error_code, message);
            if let Ok(value) = HeaderValue::from_str(&www_auth) {
                headers.insert(header::WWW_AUTHENTICATE, value);
            }
        }

        (status, headers, Json(body)).into_response()
    }
}

/// Maps an error to its client-facing (HTTP status, OAuth error code,
/// message) triple. Messages are fixed strings, never variant detail.
fn error_details(error: &AuthError) -> (StatusCode, &'static str, &'static str) {
    match error {
        AuthError::MissingAuthHeader | AuthError::MalformedAuthHeader => (
            StatusCode::UNAUTHORIZED,
            "invalid_request",
            "missing or invalid header",
        ),
        AuthError::TokenMalformed { .. }
        | AuthError::InvalidSignature
        | AuthError::WrongTokenType { .. } => {
            (StatusCode::UNAUTHORIZED, "invalid_token", "token invalid")
        }
        AuthError::InvalidClaims { .. } => (
            StatusCode::UNAUTHORIZED,
            "invalid_token",
            "invalid token claims",
        ),
        AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "invalid_token", "token expired"),
        AuthError::MalformedClaims { .. }
        | AuthError::Encoding { .. }
        | AuthError::InvalidKey { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "server_error",
            "internal error",
        ),
    }
}

/// Builds the `WWW-Authenticate` header value for 401 responses.
///
/// Format: `Bearer realm="meridian", error="invalid_token", error_description="..."`
fn build_www_authenticate_header(error: &str, description: &str) -> String {
    format!(
        "Bearer realm=\"meridian\", error=\"{}\", error_description=\"{}\"",
        error, description
    )
}
