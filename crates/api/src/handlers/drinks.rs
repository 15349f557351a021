//! Handlers for the drink catalog.
//!
//! The public listing serves the summary projection; everything else
//! sits behind a permission guard. Mutations return the affected drink
//! in full detail, wrapped in a one-element `drinks` array so all
//! drink responses share one shape.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use brewhouse_core::drink::{validate_recipe, validate_title, DrinkDetail, DrinkSummary};
use brewhouse_core::error::CoreError;
use brewhouse_core::types::DbId;
use brewhouse_db::models::drink::{CreateDrink, DrinkRow, UpdateDrink};
use brewhouse_db::repositories::DrinkRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::guard::{RequireCreate, RequireDelete, RequireReadDetail, RequireUpdate};
use crate::response::{DeleteResponse, DrinksResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /drinks
///
/// Public listing in the summary projection. No auth required.
pub async fn list_drinks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = DrinkRepo::find_all(&state.pool).await?;
    let drinks: Vec<DrinkSummary> = rows.iter().map(DrinkRow::summary).collect();

    Ok(Json(DrinksResponse {
        success: true,
        drinks,
    }))
}

/// GET /drinks-detail
///
/// Full listing including ingredient proportions. Requires the
/// `read-detail` permission.
pub async fn list_drinks_detail(
    _guard: RequireReadDetail,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = DrinkRepo::find_all(&state.pool).await?;
    let drinks: Vec<DrinkDetail> = rows.iter().map(DrinkRow::detail).collect();

    Ok(Json(DrinksResponse {
        success: true,
        drinks,
    }))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /drinks
///
/// Create a drink. Requires the `create` permission.
pub async fn create_drink(
    RequireCreate(claims): RequireCreate,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateDrink>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    validate_recipe(&input.recipe)?;

    let drink = DrinkRepo::create(&state.pool, &input).await?;

    tracing::info!(drink_id = drink.id, subject = %claims.sub, "Drink created");

    Ok(Json(DrinksResponse {
        success: true,
        drinks: vec![drink.detail()],
    }))
}

/// PATCH /drinks/{id}
///
/// Patch a drink's title and/or recipe. Requires the `update`
/// permission. Supplied fields are validated before the row is
/// touched; absent fields are left unchanged.
pub async fn update_drink(
    RequireUpdate(claims): RequireUpdate,
    State(state): State<AppState>,
    ApiPath(drink_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateDrink>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = input.title.as_deref() {
        validate_title(title)?;
    }
    if let Some(recipe) = input.recipe.as_deref() {
        validate_recipe(recipe)?;
    }

    let drink = DrinkRepo::update(&state.pool, drink_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Drink",
            id: drink_id,
        }))?;

    tracing::info!(drink_id, subject = %claims.sub, "Drink updated");

    Ok(Json(DrinksResponse {
        success: true,
        drinks: vec![drink.detail()],
    }))
}

/// DELETE /drinks/{id}
///
/// Delete a drink. Requires the `delete` permission. Responds with the
/// deleted ID so clients can reconcile local state.
pub async fn delete_drink(
    RequireDelete(claims): RequireDelete,
    State(state): State<AppState>,
    ApiPath(drink_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DrinkRepo::delete(&state.pool, drink_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Drink",
            id: drink_id,
        }));
    }

    tracing::info!(drink_id, subject = %claims.sub, "Drink deleted");

    Ok(Json(DeleteResponse {
        success: true,
        delete: drink_id,
    }))
}
