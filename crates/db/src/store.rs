//! The store seam the record service is built against.
//!
//! [`PgMovieStore`] is the production implementation over the shared pool.
//! Every method is one statement; callers that need more than one (an
//! existence check followed by a write) issue them separately, without a
//! transaction.

use async_trait::async_trait;
use cinedex_core::movie::{MoviePatch, NewMovie};
use cinedex_core::types::{DbId, LocalTimestamp};

use crate::models::movie::{Movie, MovieField};
use crate::repositories::MovieRepo;
use crate::DbPool;

#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn count(&self) -> Result<i64, sqlx::Error>;

    async fn list_page(
        &self,
        fields: &[MovieField],
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error>;

    async fn find_by_id(
        &self,
        fields: &[MovieField],
        id: DbId,
    ) -> Result<Option<Movie>, sqlx::Error>;

    async fn insert(&self, input: &NewMovie, created_at: LocalTimestamp)
        -> Result<DbId, sqlx::Error>;

    async fn update(
        &self,
        id: DbId,
        patch: &MoviePatch,
        updated_at: LocalTimestamp,
    ) -> Result<u64, sqlx::Error>;

    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error>;
}

/// Postgres-backed [`MovieStore`]. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn count(&self) -> Result<i64, sqlx::Error> {
        MovieRepo::count(&self.pool).await
    }

    async fn list_page(
        &self,
        fields: &[MovieField],
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        MovieRepo::list_page(&self.pool, fields, limit, offset).await
    }

    async fn find_by_id(
        &self,
        fields: &[MovieField],
        id: DbId,
    ) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::find_by_id(&self.pool, fields, id).await
    }

    async fn insert(
        &self,
        input: &NewMovie,
        created_at: LocalTimestamp,
    ) -> Result<DbId, sqlx::Error> {
        MovieRepo::create(&self.pool, input, created_at).await
    }

    async fn update(
        &self,
        id: DbId,
        patch: &MoviePatch,
        updated_at: LocalTimestamp,
    ) -> Result<u64, sqlx::Error> {
        MovieRepo::update(&self.pool, id, patch, updated_at).await
    }

    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error> {
        MovieRepo::delete(&self.pool, id).await
    }
}
