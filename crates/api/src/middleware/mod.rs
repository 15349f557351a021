//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthClaims`] -- Extracts the verified claims from a JWT Bearer token.
//! - [`guard::RequireReadDetail`] -- Requires the `read-detail` permission.
//! - [`guard::RequireCreate`] -- Requires the `create` permission.
//! - [`guard::RequireUpdate`] -- Requires the `update` permission.
//! - [`guard::RequireDelete`] -- Requires the `delete` permission.

pub mod auth;
pub mod guard;
