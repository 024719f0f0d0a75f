//! Shared response envelope for API handlers.
//!
//! Every JSON response uses a `{ "success", "message", "data" }` envelope.
//! Failures omit `data`.

use serde::Serialize;

/// Standard `{ success, message, data }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::success("Record Fetched Successfully", movie)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
