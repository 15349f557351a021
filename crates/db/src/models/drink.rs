//! Drink model: a titled recipe stored as one row in `drinks`.

use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

use brewhouse_core::drink::{DrinkDetail, DrinkSummary, Ingredient, IngredientSummary};
use brewhouse_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A drink row.
///
/// Rows are never serialized directly: responses go through
/// [`DrinkRow::summary`] or [`DrinkRow::detail`], which keep the audit
/// columns out of the API surface.
#[derive(Debug, Clone, FromRow)]
pub struct DrinkRow {
    pub id: DbId,
    pub title: String,
    /// JSONB array of ingredient objects.
    pub recipe: Json<Vec<Ingredient>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DrinkRow {
    /// The public projection: ingredient proportions are withheld.
    pub fn summary(&self) -> DrinkSummary {
        DrinkSummary {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.0.iter().map(IngredientSummary::from).collect(),
        }
    }

    /// The full projection, served to authorized consumers.
    pub fn detail(&self) -> DrinkDetail {
        DrinkDetail {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.0.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Payload for creating a drink.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Payload for patching a drink. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDrink {
    pub title: Option<String>,
    pub recipe: Option<Vec<Ingredient>>,
}
