//! Repository for the `drinks` table.
//!
//! Provides drink CRUD. Mutations run inside an explicit transaction;
//! dropping the transaction on an early error return rolls it back.

use sqlx::types::Json;
use sqlx::PgPool;

use brewhouse_core::types::DbId;

use crate::models::drink::{CreateDrink, DrinkRow, UpdateDrink};

/// Column list for `drinks` queries.
const COLUMNS: &str = "id, title, recipe, created_at, updated_at";

/// Provides CRUD operations for drinks.
pub struct DrinkRepo;

impl DrinkRepo {
    /// List all drinks ordered by ID.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<DrinkRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks ORDER BY id");
        sqlx::query_as::<_, DrinkRow>(&query).fetch_all(pool).await
    }

    /// Find a drink by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DrinkRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks WHERE id = $1");
        sqlx::query_as::<_, DrinkRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new drink and return the stored row.
    ///
    /// Fails with a database error if the title is already taken
    /// (`uq_drinks_title`).
    pub async fn create(pool: &PgPool, input: &CreateDrink) -> Result<DrinkRow, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query =
            format!("INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, DrinkRow>(&query)
            .bind(&input.title)
            .bind(Json(&input.recipe))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Patch a drink's `title` and/or `recipe`.
    ///
    /// Returns `None` if no drink with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDrink,
    ) -> Result<Option<DrinkRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE drinks SET \
                 title = COALESCE($2, title), \
                 recipe = COALESCE($3, recipe), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DrinkRow>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.recipe.as_ref().map(Json))
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Delete a drink by ID.
    ///
    /// Returns `true` if a drink was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
