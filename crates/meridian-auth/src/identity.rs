//! Authenticated identity context.

use crate::claims::Claims;

/// The identity established by a successfully validated token.
///
/// Owned by the caller for the duration of one request; it carries no
/// reference back into the token and is never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque identifier of the authenticated user.
    pub user_id: String,

    /// Role names granted to the user.
    pub roles: Vec<String>,
}

impl Identity {
    /// Returns `true` if the identity holds a specific role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Returns `true` if the identity holds any of the specified roles.
    #[must_use]
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            roles: claims.roles,
        }
    }
}
