use crate::types::DbId;

/// Closed set of failures the record service can report.
///
/// The transport boundary maps every variant to a status code; nothing
/// outside this enum is surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller payload or identifier failed validation. The message is
    /// already sanitized and safe to show.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request envelope itself could not be decoded.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// A store call failed. Carries a caller-safe message only; the
    /// underlying cause is logged where the failure is caught.
    #[error("Persistence error: {0}")]
    Persistence(String),
}
