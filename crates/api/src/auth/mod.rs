//! Authentication and authorization primitives.
//!
//! Tokens are issued by an external identity provider; this API only
//! verifies them. [`jwt`] holds the claims model and verification,
//! [`AuthError`] the typed failures the guards surface to clients.

use axum::http::StatusCode;

use brewhouse_core::permission::Permission;

pub mod jwt;

/// A failure raised while authenticating or authorizing a request.
///
/// Each variant carries a fixed HTTP status and a stable machine-readable
/// code so clients can distinguish the failure modes.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header was supplied on a guarded route.
    #[error("Authorization header is expected")]
    MissingHeader,

    /// The `Authorization` header is not of the form `Bearer <token>`.
    #[error("Authorization header must be of the form 'Bearer <token>'")]
    MalformedHeader,

    /// The token's `exp` claim is in the past.
    #[error("Token has expired")]
    TokenExpired,

    /// The token could not be decoded or verified (bad signature,
    /// wrong issuer or audience, missing claims).
    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    /// The token verified but does not carry the required permission.
    #[error("Permission '{required}' is required")]
    InsufficientPermission { required: Permission },
}

impl AuthError {
    /// The HTTP status this failure maps to: 403 for a permission
    /// shortfall, 401 for everything else.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InsufficientPermission { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Stable machine-readable code for the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingHeader => "AUTH_HEADER_MISSING",
            Self::MalformedHeader => "AUTH_HEADER_MALFORMED",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidToken(_) => "TOKEN_INVALID",
            Self::InsufficientPermission { .. } => "INSUFFICIENT_PERMISSION",
        }
    }
}
