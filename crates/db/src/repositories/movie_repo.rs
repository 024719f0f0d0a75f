//! Repository for the `movies` table.

use cinedex_core::movie::{MoviePatch, NewMovie};
use cinedex_core::types::{DbId, LocalTimestamp};
use sqlx::PgPool;

use crate::models::movie::{select_list, Movie, MovieField};

/// Provides the single-statement operations the record service composes.
pub struct MovieRepo;

impl MovieRepo {
    /// Total number of rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }

    /// One page of the projection, newest first.
    ///
    /// `id DESC` breaks ties between equal `created_at` values so page
    /// boundaries are reproducible.
    pub async fn list_page(
        pool: &PgPool,
        fields: &[MovieField],
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM movies ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            select_list(fields)
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a movie by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        fields: &[MovieField],
        id: DbId,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {} FROM movies WHERE id = $1", select_list(fields));
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new movie, returning the store-assigned ID.
    pub async fn create(
        pool: &PgPool,
        input: &NewMovie,
        created_at: LocalTimestamp,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO movies (title, producer, release_date, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.producer)
        .bind(&input.release_date)
        .bind(created_at)
        .fetch_one(pool)
        .await
    }

    /// Update a movie. Only non-`None` fields in `patch` are applied;
    /// `updated_at` is always set. Returns the number of rows touched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &MoviePatch,
        updated_at: LocalTimestamp,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movies SET
                title = COALESCE($2, title),
                producer = COALESCE($3, producer),
                release_date = COALESCE($4, release_date),
                updated_at = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.producer)
        .bind(&patch.release_date)
        .bind(updated_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Permanently delete a movie by ID. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
