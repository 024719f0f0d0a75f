//! Movie payload types and validation rules.
//!
//! Create payloads require every field; update payloads accept any subset.
//! Rules run title, producer, release date, then reject unknown keys. The
//! first violation wins.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::validation::{payload_object, reject_unknown_keys, Field};

/// Entity name used in not-found errors and log fields.
pub const ENTITY: &str = "Movie";

pub const TITLE: Field = Field::new("title", "Title");
pub const PRODUCER: Field = Field::new("producer", "Producer");
pub const RELEASE_DATE: Field = Field::new("release_date", "Release date");

/// Declared fields in validation order.
pub const FIELDS: [Field; 3] = [TITLE, PRODUCER, RELEASE_DATE];

/// Validated create payload. Identifier and timestamps are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMovie {
    pub title: String,
    pub producer: String,
    pub release_date: String,
}

/// Validated update payload. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoviePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// Validate a create payload. An absent payload is treated as `{}`.
pub fn validate_create(payload: Option<&Value>) -> Result<NewMovie, CoreError> {
    let obj = payload_object(payload)?;

    let title = TITLE.non_empty_trimmed(TITLE.required(TITLE.string(&obj)?)?)?;
    let producer = PRODUCER.non_empty_trimmed(PRODUCER.required(PRODUCER.string(&obj)?)?)?;
    let release_date =
        RELEASE_DATE.iso_date(RELEASE_DATE.required(RELEASE_DATE.string(&obj)?)?)?;

    reject_unknown_keys(&obj, &FIELDS)?;

    Ok(NewMovie {
        title,
        producer,
        release_date,
    })
}

/// Validate an update payload. Only present fields are checked.
pub fn validate_update(payload: Option<&Value>) -> Result<MoviePatch, CoreError> {
    let obj = payload_object(payload)?;

    let title = TITLE
        .string(&obj)?
        .map(|v| TITLE.non_empty_trimmed(v))
        .transpose()?;
    let producer = PRODUCER
        .string(&obj)?
        .map(|v| PRODUCER.non_empty_trimmed(v))
        .transpose()?;
    let release_date = RELEASE_DATE
        .string(&obj)?
        .map(|v| RELEASE_DATE.iso_date(v))
        .transpose()?;

    reject_unknown_keys(&obj, &FIELDS)?;

    Ok(MoviePatch {
        title,
        producer,
        release_date,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn create_err(payload: Value) -> String {
        match validate_create(Some(&payload)) {
            Err(CoreError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn update_err(payload: Value) -> String {
        match validate_update(Some(&payload)) {
            Err(CoreError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // -- validate_create -----------------------------------------------------

    #[test]
    fn create_accepts_complete_payload() {
        let movie = validate_create(Some(&json!({
            "title": "Dune",
            "producer": "Legendary",
            "release_date": "2021-10-22",
        })))
        .unwrap();

        assert_eq!(
            movie,
            NewMovie {
                title: "Dune".into(),
                producer: "Legendary".into(),
                release_date: "2021-10-22".into(),
            }
        );
    }

    #[test]
    fn create_trims_title_and_producer() {
        let movie = validate_create(Some(&json!({
            "title": "  Heat ",
            "producer": "\tRegency\n",
            "release_date": "1995-12-15",
        })))
        .unwrap();

        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.producer, "Regency");
    }

    #[test]
    fn create_rejects_empty_title() {
        let msg = create_err(json!({"title": "", "producer": "WB", "release_date": "2020-01-01"}));
        assert_eq!(msg, "Title cannot be empty");
    }

    #[test]
    fn create_rejects_whitespace_only_producer() {
        let msg = create_err(json!({"title": "X", "producer": "   ", "release_date": "2020-01-01"}));
        assert_eq!(msg, "Producer cannot be empty");
    }

    #[test]
    fn create_rejects_wrong_date_shape() {
        let msg = create_err(json!({"title": "X", "producer": "Y", "release_date": "01-01-2020"}));
        assert_eq!(msg, "Release date should be in this YYYY-MM-DD format");
    }

    #[test]
    fn create_absent_payload_reports_title_first() {
        assert_matches!(
            validate_create(None),
            Err(CoreError::Validation(msg)) if msg == "Title is required"
        );
    }

    #[test]
    fn create_reports_first_violation_in_field_order() {
        // Both producer and release date are bad; producer is declared first.
        let msg = create_err(json!({"title": "X", "producer": "", "release_date": "nope"}));
        assert_eq!(msg, "Producer cannot be empty");

        let msg = create_err(json!({"title": "X", "producer": "Y"}));
        assert_eq!(msg, "Release date is required");
    }

    #[test]
    fn create_rejects_non_string_fields() {
        let msg = create_err(json!({"title": 12, "producer": "Y", "release_date": "2020-01-01"}));
        assert_eq!(msg, "Title must be a string");

        let msg = create_err(json!({"title": "X", "producer": null, "release_date": "2020-01-01"}));
        assert_eq!(msg, "Producer must be a string");
    }

    #[test]
    fn create_rejects_client_supplied_identifier() {
        let msg = create_err(json!({
            "id": 9,
            "title": "X",
            "producer": "Y",
            "release_date": "2020-01-01",
        }));
        assert_eq!(msg, "id is not allowed");
    }

    #[test]
    fn unknown_key_message_is_sanitized() {
        let msg = create_err(json!({
            "title": "X",
            "producer": "Y",
            "release_date": "2020-01-01",
            "created_at": "now",
        }));
        assert_eq!(msg, "createdat is not allowed");
    }

    #[test]
    fn create_rejects_array_payload() {
        assert_eq!(create_err(json!(["Dune"])), "Payload must be an object");
    }

    // -- validate_update -----------------------------------------------------

    #[test]
    fn update_accepts_empty_payload() {
        let patch = validate_update(Some(&json!({}))).unwrap();
        assert_eq!(patch, MoviePatch::default());
        assert_eq!(validate_update(None).unwrap(), MoviePatch::default());
    }

    #[test]
    fn update_passes_absent_fields_through() {
        let patch = validate_update(Some(&json!({"producer": " Syncopy "}))).unwrap();
        assert_eq!(
            patch,
            MoviePatch {
                title: None,
                producer: Some("Syncopy".into()),
                release_date: None,
            }
        );
    }

    #[test]
    fn update_validates_present_fields() {
        assert_eq!(update_err(json!({"title": "  "})), "Title cannot be empty");
        assert_eq!(
            update_err(json!({"release_date": "2020-1-1"})),
            "Release date should be in this YYYY-MM-DD format"
        );
        assert_eq!(update_err(json!({"title": null})), "Title must be a string");
    }

    #[test]
    fn update_rejects_unknown_keys() {
        assert_eq!(update_err(json!({"updated_at": "x"})), "updatedat is not allowed");
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = MoviePatch {
            title: Some("Tenet".into()),
            ..MoviePatch::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"title": "Tenet"}));
    }
}
