//! Pure domain logic for the movie record service.
//!
//! No I/O lives here: error taxonomy, shared types, the application clock,
//! pagination arithmetic and payload validation.

pub mod clock;
pub mod error;
pub mod movie;
pub mod pagination;
pub mod types;
pub mod validation;
