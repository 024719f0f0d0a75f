use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Wall-clock timestamps in the configured application timezone.
///
/// Stored in `TIMESTAMP` (no zone) columns; see [`crate::clock::AppClock`].
pub type LocalTimestamp = chrono::NaiveDateTime;

/// Parse a path identifier into a [`DbId`].
///
/// Anything other than a positive integer is a caller input error, kept
/// distinct from a well-formed id that matches no row.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(
            "Movie id must be a positive integer".to_string(),
        )),
    }
}
