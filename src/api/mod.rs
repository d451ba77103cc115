//! HTTP adapter for the movie catalog REST backend.

mod client;
mod error;
mod types;

pub use client::{CatalogApi, HttpCatalogApi};
pub use error::ApiError;
pub use types::{Genre, Movie, MovieId, MovieRef, NewMovie};
