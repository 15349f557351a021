use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use brewhouse_core::error::CoreError;

use crate::auth::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`AuthError`] for guard
/// failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce the `{success, error, message}` JSON
/// envelope shared by every error response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `brewhouse_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An authentication or authorization failure from a guard.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A missing resource or unroutable request.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Semantically unprocessable input. Registered in the response
    /// mapping but currently produced by no handler.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Guard failures ---
            AppError::Auth(err) => (err.status(), err.code(), err.to_string()),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE", msg.clone())
            }
        };

        let body = json!({
            "success": false,
            "error": code,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// Persistence failures surface as a generic 400: by the time a
/// repository call fails, the statement's transaction has already been
/// rolled back. Unique violations on `uq_`-named constraints keep a
/// more specific message so clients can tell a duplicate title apart
/// from an outage. `RowNotFound` maps to 404.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::BAD_REQUEST,
                        "BAD_REQUEST",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "Bad request".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "Bad request".to_string(),
            )
        }
    }
}
