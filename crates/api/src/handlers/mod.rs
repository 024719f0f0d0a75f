//! HTTP handlers, one module per resource.

pub mod fallback;
pub mod movie;
