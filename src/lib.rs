//! Client-side state and effect layer for a movie catalog REST backend.
//!
//! A [`store::Store`] holds four slices reduced by pure reducers in
//! [`catalog`]. The [`effects`] coordinator watches intent actions and calls
//! the backend through [`api`], dispatching the results back into the store.

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod effects;
pub mod logging;
pub mod mvi;
pub mod store;
