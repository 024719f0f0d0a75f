//! Movie entity model and column projections.

use cinedex_core::movie::{MoviePatch, NewMovie};
use cinedex_core::types::{DbId, LocalTimestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A (possibly projected) row from the `movies` table.
///
/// Columns left out of the projection decode as `None` and are omitted
/// when serialized. `id` is always selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<LocalTimestamp>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<LocalTimestamp>,
}

impl Movie {
    /// The record reported after a create: store id merged over the input.
    pub fn from_new(id: DbId, input: &NewMovie, created_at: LocalTimestamp) -> Self {
        Self {
            id,
            title: Some(input.title.clone()),
            producer: Some(input.producer.clone()),
            release_date: Some(input.release_date.clone()),
            created_at: Some(created_at),
            updated_at: None,
        }
    }

    /// Merge the applied changes over this (pre-update) record.
    pub fn merge_patch(mut self, patch: &MoviePatch, updated_at: LocalTimestamp) -> Self {
        if let Some(title) = &patch.title {
            self.title = Some(title.clone());
        }
        if let Some(producer) = &patch.producer {
            self.producer = Some(producer.clone());
        }
        if let Some(release_date) = &patch.release_date {
            self.release_date = Some(release_date.clone());
        }
        self.updated_at = Some(updated_at);
        self
    }
}

/// Selectable columns of the `movies` table.
///
/// Projections are built only from these variants, so a field list can
/// never inject SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieField {
    Id,
    Title,
    Producer,
    ReleaseDate,
    CreatedAt,
    UpdatedAt,
}

impl MovieField {
    pub fn column(self) -> &'static str {
        match self {
            MovieField::Id => "id",
            MovieField::Title => "title",
            MovieField::Producer => "producer",
            MovieField::ReleaseDate => "release_date",
            MovieField::CreatedAt => "created_at",
            MovieField::UpdatedAt => "updated_at",
        }
    }
}

/// Projection used when listing.
pub const LIST_FIELDS: &[MovieField] = &[
    MovieField::Id,
    MovieField::Title,
    MovieField::Producer,
    MovieField::CreatedAt,
];

/// Projection used when reading or mutating a single record.
pub const DETAIL_FIELDS: &[MovieField] = &[
    MovieField::Id,
    MovieField::Title,
    MovieField::Producer,
    MovieField::ReleaseDate,
    MovieField::CreatedAt,
];

/// Render a projection as a `SELECT` column list. `id` is always included
/// and duplicates are dropped.
pub fn select_list(fields: &[MovieField]) -> String {
    let mut columns = vec![MovieField::Id.column()];
    for field in fields {
        let column = field.column();
        if !columns.contains(&column) {
            columns.push(column);
        }
    }
    columns.join(", ")
}
