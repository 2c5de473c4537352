//! # meridian-gateway
//!
//! Perimeter token enforcement for the Meridian platform.
//!
//! Every inbound request crosses the [`filter::enforce`] middleware before
//! reaching any downstream service: the access token is validated, the
//! authenticated identity is attached as trusted headers and a request
//! extension, and anything that fails validation is rejected at the edge
//! with a coarse 401.

pub mod filter;

pub use filter::{USER_ID_HEADER, USER_ROLES_HEADER, enforce};
