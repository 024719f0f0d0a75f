//! Services composing core logic with the store.

pub mod movie_service;

pub use movie_service::MovieService;
