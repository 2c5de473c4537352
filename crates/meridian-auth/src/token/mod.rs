//! Token signing, verification, and issuance.
//!
//! This module provides:
//!
//! - JWT encoding and verification against a pinned algorithm
//! - Access and refresh token issuance with configured lifetimes

pub mod issuer;
pub mod jwt;

pub use issuer::{TokenIssuer, TokenPair};
pub use jwt::{JwtCodec, SigningAlgorithm, SigningKey};
