//! Shared response envelope types for API handlers.
//!
//! All success responses carry a `success: true` flag next to their
//! payload. Use these structs instead of ad-hoc `serde_json::json!`
//! blocks to get compile-time type safety and consistent serialization.

use serde::Serialize;

use brewhouse_core::types::DbId;

/// Standard `{ "success": true, "drinks": [...] }` envelope.
///
/// Both drink projections serialize through this; `T` is either a
/// summary or a detail view.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DrinksResponse { success: true, drinks }))
/// ```
#[derive(Debug, Serialize)]
pub struct DrinksResponse<T: Serialize> {
    pub success: bool,
    pub drinks: Vec<T>,
}

/// Envelope for a successful deletion: echoes the deleted ID.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub delete: DbId,
}
