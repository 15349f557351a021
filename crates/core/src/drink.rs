//! Drink and recipe domain types, plus the two field-set projections
//! served by the catalog endpoints.
//!
//! A drink is a titled recipe: an ordered list of ingredients, each
//! with a display name, a render color, and a relative proportion
//! (`parts`). The public listing serves a reduced projection that
//! hides the proportions; authorized consumers get the full recipe.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a drink title in characters.
pub const MAX_TITLE_LENGTH: usize = 80;

// ---------------------------------------------------------------------------
// Recipe types
// ---------------------------------------------------------------------------

/// One ingredient of a drink recipe, as stored and as served in the
/// detail projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Display color used by clients to render the ingredient band.
    pub color: String,
    /// Relative proportion of this ingredient within the drink.
    pub parts: i32,
}

/// The reduced ingredient view served by the public listing: the
/// proportions stay hidden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientSummary {
    pub name: String,
    pub color: String,
}

impl From<&Ingredient> for IngredientSummary {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            color: ingredient.color.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// Full drink representation: requires the `read-detail` permission
/// (or is returned from a successful mutation).
#[derive(Debug, Clone, Serialize)]
pub struct DrinkDetail {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Public drink representation with proportion-free ingredients.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkSummary {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<IngredientSummary>,
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a drink title: non-blank and within the length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Drink title must not be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Drink title must not exceed {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a recipe: at least one ingredient, each with a name and a
/// positive number of parts.
pub fn validate_recipe(recipe: &[Ingredient]) -> Result<(), CoreError> {
    if recipe.is_empty() {
        return Err(CoreError::Validation(
            "Recipe must contain at least one ingredient".to_string(),
        ));
    }
    for ingredient in recipe {
        if ingredient.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Ingredient name must not be empty".to_string(),
            ));
        }
        if ingredient.parts < 1 {
            return Err(CoreError::Validation(format!(
                "Ingredient '{}' must have at least 1 part",
                ingredient.name
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
