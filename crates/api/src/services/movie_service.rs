//! Record service for movies.
//!
//! Composes the validation pipeline and pagination plan into store calls
//! and enforces existence-before-mutate. Store failures are logged here
//! with their cause and re-signaled as [`CoreError::Persistence`] carrying a
//! caller-safe message.
//!
//! Update and delete run the existence check and the write as separate
//! statements with no transaction. A concurrent delete can land in
//! between; that race is logged, not prevented.

use std::sync::Arc;

use cinedex_core::clock::AppClock;
use cinedex_core::error::CoreError;
use cinedex_core::movie::{self, ENTITY};
use cinedex_core::pagination::{PageRequest, Paginated};
use cinedex_core::types::DbId;
use cinedex_db::models::movie::{Movie, MovieField, DETAIL_FIELDS};
use cinedex_db::store::MovieStore;
use serde_json::Value;

const LIST_FAILED: &str = "An error occurred while retrieving records. Please try again.";
const CREATE_FAILED: &str = "An error occurred while creating the record. Please try again.";
const GET_FAILED: &str = "An error occurred while retrieving the record. Please try again.";
const UPDATE_FAILED: &str = "An error occurred while updating the record. Please try again.";
const DELETE_FAILED: &str = "An error occurred while deleting the record. Please try again.";

/// Movie CRUD over an injected [`MovieStore`].
///
/// Cheap to clone: the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct MovieService {
    store: Arc<dyn MovieStore>,
    clock: AppClock,
}

impl MovieService {
    pub fn new(store: Arc<dyn MovieStore>, clock: AppClock) -> Self {
        Self { store, clock }
    }

    /// One page of `fields`, newest first, plus the total row count.
    ///
    /// The select and the count are independent statements.
    pub async fn list(
        &self,
        fields: &[MovieField],
        page: &PageRequest,
    ) -> Result<(Vec<Movie>, i64), CoreError> {
        let plan = page.plan();

        let items = self
            .store
            .list_page(fields, plan.limit, plan.offset)
            .await
            .map_err(|e| persistence("list", None, e, LIST_FAILED))?;

        let total = self
            .store
            .count()
            .await
            .map_err(|e| persistence("count", None, e, LIST_FAILED))?;

        Ok((items, total))
    }

    /// [`list`](Self::list) with the page metadata computed from the count.
    pub async fn paginate(
        &self,
        fields: &[MovieField],
        page: &PageRequest,
    ) -> Result<Paginated<Movie>, CoreError> {
        let (items, total) = self.list(fields, page).await?;
        Ok(page.summarize(total).with_items(items))
    }

    /// Validate and insert a movie. Invalid payloads never reach the store.
    pub async fn create(&self, payload: Option<&Value>) -> Result<Movie, CoreError> {
        let input = movie::validate_create(payload)?;
        let created_at = self.clock.now();

        let id = self
            .store
            .insert(&input, created_at)
            .await
            .map_err(|e| persistence("create", None, e, CREATE_FAILED))?;

        tracing::info!(movie_id = id, "Movie record created");
        Ok(Movie::from_new(id, &input, created_at))
    }

    /// Fetch one movie, or [`CoreError::NotFound`].
    pub async fn get_one(&self, fields: &[MovieField], id: DbId) -> Result<Movie, CoreError> {
        self.store
            .find_by_id(fields, id)
            .await
            .map_err(|e| persistence("get", Some(id), e, GET_FAILED))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Validate a partial payload, confirm the movie exists, then apply it.
    ///
    /// Returns the pre-update record merged with the applied changes and the
    /// new `updated_at`; the row is not re-read.
    pub async fn update(&self, payload: Option<&Value>, id: DbId) -> Result<Movie, CoreError> {
        let patch = movie::validate_update(payload)?;
        let existing = self.get_one(DETAIL_FIELDS, id).await?;
        let updated_at = self.clock.now();

        let touched = self
            .store
            .update(id, &patch, updated_at)
            .await
            .map_err(|e| persistence("update", Some(id), e, UPDATE_FAILED))?;

        if touched == 0 {
            tracing::warn!(
                movie_id = id,
                "Movie vanished between existence check and update"
            );
        }

        Ok(existing.merge_patch(&patch, updated_at))
    }

    /// Confirm the movie exists, then remove it.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.get_one(&[MovieField::Id], id).await?;

        let removed = self
            .store
            .delete(id)
            .await
            .map_err(|e| persistence("delete", Some(id), e, DELETE_FAILED))?;

        if removed == 0 {
            tracing::warn!(
                movie_id = id,
                "Movie vanished between existence check and delete"
            );
        } else {
            tracing::info!(movie_id = id, "Movie record deleted");
        }
        Ok(())
    }
}

/// Log a store failure with its cause and return the sanitized error.
fn persistence(
    operation: &'static str,
    movie_id: Option<DbId>,
    err: sqlx::Error,
    message: &str,
) -> CoreError {
    tracing::error!(operation, movie_id, error = %err, "Movie store call failed");
    CoreError::Persistence(message.to_string())
}
