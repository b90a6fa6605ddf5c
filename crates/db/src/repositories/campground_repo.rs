//! Repository for the `campgrounds` table.

use sqlx::PgPool;
use yelpcamp_core::types::{self, DbId};

use crate::models::campground::{Campground, CreateCampground, UpdateCampground};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, location, price, description, image, created_at, updated_at";

/// Provides CRUD operations for campgrounds.
pub struct CampgroundRepo;

impl CampgroundRepo {
    /// Insert a new campground under a freshly generated id, returning the row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCampground,
    ) -> Result<Campground, sqlx::Error> {
        let query = format!(
            "INSERT INTO campgrounds (id, title, location, price, description, image)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campground>(&query)
            .bind(types::new_id())
            .bind(&input.title)
            .bind(&input.location)
            .bind(input.price)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a campground by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campground>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campgrounds WHERE id = $1");
        sqlx::query_as::<_, Campground>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every campground in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Campground>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campgrounds ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Campground>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a campground. Fields left as `None` keep their stored value;
    /// `Some(None)` clears the column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCampground,
    ) -> Result<Option<Campground>, sqlx::Error> {
        let query = format!(
            "UPDATE campgrounds SET
                title = COALESCE($2, title),
                location = CASE WHEN $3 THEN $4 ELSE location END,
                price = CASE WHEN $5 THEN $6 ELSE price END,
                description = CASE WHEN $7 THEN $8 ELSE description END,
                image = CASE WHEN $9 THEN $10 ELSE image END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campground>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.location.is_some())
            .bind(input.location.clone().flatten())
            .bind(input.price.is_some())
            .bind(input.price.flatten())
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.image.is_some())
            .bind(input.image.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a campground by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campgrounds WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
