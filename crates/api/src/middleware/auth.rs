//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::{verify_token, Claims};
use crate::auth::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// Verified token claims extracted from the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires a
/// valid token regardless of permissions:
///
/// ```ignore
/// async fn my_handler(AuthClaims(claims): AuthClaims) -> AppResult<Json<()>> {
///     tracing::info!(subject = %claims.sub, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingHeader)?;

        let token = parse_bearer(header)?;
        let claims = verify_token(token, &state.config.jwt)?;

        Ok(AuthClaims(claims))
    }
}

/// Parse a `Bearer <token>` header value.
///
/// The scheme is case-sensitive and exactly one token part must follow
/// it; anything else is rejected as malformed.
fn parse_bearer(header: &str) -> Result<&str, AuthError> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}
