//! The permission vocabulary enforced by the API authorization guards.
//!
//! These must match the permission strings granted to access tokens by
//! the identity provider. Each mutating or privileged endpoint requires
//! exactly one of them.

use std::fmt;

/// A permission a bearer token can carry in its `permissions` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Read the full drink representation, including ingredient parts.
    ReadDetail,
    /// Create a new drink.
    Create,
    /// Update an existing drink.
    Update,
    /// Delete an existing drink.
    Delete,
}

impl Permission {
    /// The claim string as it appears in issued tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadDetail => "read-detail",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
