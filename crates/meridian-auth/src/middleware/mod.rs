//! HTTP middleware for authentication.
//!
//! This module provides:
//!
//! - The [`RequireAuth`] extractor for per-handler access token validation
//! - The `IntoResponse` mapping that turns [`crate::AuthError`] rejections
//!   into coarse 401/500 responses

pub mod auth;
pub mod error;

pub use auth::{AuthState, RequireAuth};
