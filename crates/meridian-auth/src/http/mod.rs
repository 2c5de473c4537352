//! Axum HTTP handlers for the issuing service.

pub mod refresh;

pub use refresh::{RefreshState, refresh_handler};
