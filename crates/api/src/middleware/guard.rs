//! Permission guard extractors.
//!
//! Each guard wraps [`AuthClaims`] and rejects requests whose token
//! does not carry the required permission. Use these in route handlers
//! to enforce authorization at the type level: authentication failures
//! reject with 401, permission shortfalls with 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use brewhouse_core::permission::Permission;

use super::auth::AuthClaims;
use crate::auth::jwt::Claims;
use crate::auth::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticate the request and check a single required permission.
async fn authorize(
    parts: &mut Parts,
    state: &AppState,
    permission: Permission,
) -> Result<Claims, AppError> {
    let AuthClaims(claims) = AuthClaims::from_request_parts(parts, state).await?;
    if !claims.has_permission(permission) {
        return Err(AuthError::InsufficientPermission {
            required: permission,
        }
        .into());
    }
    Ok(claims)
}

/// Requires the `read-detail` permission.
///
/// ```ignore
/// async fn detail(RequireReadDetail(claims): RequireReadDetail) -> AppResult<Json<()>> {
///     // claims carry "read-detail" here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireReadDetail(pub Claims);

impl FromRequestParts<AppState> for RequireReadDetail {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = authorize(parts, state, Permission::ReadDetail).await?;
        Ok(RequireReadDetail(claims))
    }
}

/// Requires the `create` permission.
pub struct RequireCreate(pub Claims);

impl FromRequestParts<AppState> for RequireCreate {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = authorize(parts, state, Permission::Create).await?;
        Ok(RequireCreate(claims))
    }
}

/// Requires the `update` permission.
pub struct RequireUpdate(pub Claims);

impl FromRequestParts<AppState> for RequireUpdate {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = authorize(parts, state, Permission::Update).await?;
        Ok(RequireUpdate(claims))
    }
}

/// Requires the `delete` permission.
pub struct RequireDelete(pub Claims);

impl FromRequestParts<AppState> for RequireDelete {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = authorize(parts, state, Permission::Delete).await?;
        Ok(RequireDelete(claims))
    }
}
