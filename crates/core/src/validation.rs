//! Payload validation helpers.
//!
//! Payloads arrive as loosely-typed JSON so that absent fields, `null`s and
//! wrongly-typed values can each be reported with their own message. Rules
//! run in field-declaration order and stop at the first violation.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// `YYYY-MM-DD` shape. Shape only: no calendar check.
const ISO_DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

/// Anything that is not a letter, digit, whitespace or hyphen.
const UNSAFE_MESSAGE_CHARS: &str = r"[^\p{L}\p{N}\s-]";

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ISO_DATE_PATTERN).expect("valid regex"));

static UNSAFE_MESSAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UNSAFE_MESSAGE_CHARS).expect("valid regex"));

/// Strip every character outside letters, digits, whitespace and `-`.
pub fn sanitize_message(message: &str) -> String {
    UNSAFE_MESSAGE_RE.replace_all(message, "").into_owned()
}

/// Build a [`CoreError::Validation`] with a sanitized message.
pub fn validation_error(message: impl AsRef<str>) -> CoreError {
    CoreError::Validation(sanitize_message(message.as_ref()))
}

/// True when `value` has the `YYYY-MM-DD` shape.
pub fn is_iso_date_shape(value: &str) -> bool {
    ISO_DATE_RE.is_match(value)
}

/// View a payload as an object. An absent payload or JSON `null` is an
/// empty object.
pub fn payload_object(payload: Option<&Value>) -> Result<Map<String, Value>, CoreError> {
    match payload {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(validation_error("Payload must be an object")),
    }
}

/// A string field declaration: its JSON key and the label used in messages.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
}

impl Field {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }

    /// Extract the field as a string.
    ///
    /// Returns `Ok(None)` when the key is absent; a present key holding
    /// anything other than a string (including `null`) is an error.
    pub fn string<'a>(&self, obj: &'a Map<String, Value>) -> Result<Option<&'a str>, CoreError> {
        match obj.get(self.key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(validation_error(format!("{} must be a string", self.label))),
        }
    }

    /// Absent keys fail with `<label> is required`.
    pub fn required<'a>(&self, value: Option<&'a str>) -> Result<&'a str, CoreError> {
        value.ok_or_else(|| validation_error(format!("{} is required", self.label)))
    }

    /// Trim surrounding whitespace; an empty result fails.
    pub fn non_empty_trimmed(&self, value: &str) -> Result<String, CoreError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(validation_error(format!("{} cannot be empty", self.label)));
        }
        Ok(trimmed.to_string())
    }

    /// Require the `YYYY-MM-DD` shape.
    pub fn iso_date(&self, value: &str) -> Result<String, CoreError> {
        if !is_iso_date_shape(value) {
            return Err(validation_error(format!(
                "{} should be in this YYYY-MM-DD format",
                self.label
            )));
        }
        Ok(value.to_string())
    }
}

/// Reject keys outside `allowed`, reporting the first one found.
pub fn reject_unknown_keys(obj: &Map<String, Value>, allowed: &[Field]) -> Result<(), CoreError> {
    match obj
        .keys()
        .find(|key| !allowed.iter().any(|f| f.key == key.as_str()))
    {
        Some(key) => Err(validation_error(format!("{key} is not allowed"))),
        None => Ok(()),
    }
}
