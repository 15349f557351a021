//! Extractor wrappers that reject with the shared error envelope.
//!
//! Axum's built-in extractors reject with plain-text bodies.
//! [`ApiJson`] and [`ApiPath`] delegate to them and convert the
//! rejections into [`AppError`] so malformed bodies and paths produce
//! the same `{success, error, message}` envelope as every other
//! failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor rejecting with a 400 envelope.
///
/// ```ignore
/// async fn create(ApiJson(input): ApiJson<CreateDrink>) -> AppResult<Json<()>> {
///     // input deserialized successfully
///     Ok(Json(()))
/// }
/// ```
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| AppError::BadRequest(err.body_text()))?;
        Ok(ApiJson(value))
    }
}

/// Path parameter extractor rejecting with a 404 envelope.
///
/// A path that does not parse into the expected type (e.g. a
/// non-numeric ID) names no resource, so the rejection is 404 rather
/// than 400.
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("resource not found".to_string()))?;
        Ok(ApiPath(value))
    }
}
