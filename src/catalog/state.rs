//! Catalog slices and the aggregate state.

use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::{Genre, Movie, MovieId};
use crate::mvi::SliceState;

/// Immutable, shared sequence of backend records.
///
/// Cloning is a refcount bump, so snapshots and "unchanged" reducer results
/// share one allocation. [`Records::ptr_eq`] tells whether two values are
/// the same allocation rather than merely equal.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Records<T>(Arc<[T]>);

impl<T> Records<T> {
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Records<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for Records<T> {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl<T> Deref for Records<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Records<T> {
    fn from(items: Vec<T>) -> Self {
        Self(Arc::from(items))
    }
}

impl<T> FromIterator<T> for Records<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: PartialEq + Send + Sync + 'static> SliceState for Records<T> {}

impl SliceState for MovieId {}

/// Aggregate store state: one field per slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogState {
    /// All movies, as last loaded.
    pub movies: Records<Movie>,
    /// Genres of the movie whose details were last requested.
    pub genres: Records<Genre>,
    /// Every genre the backend knows.
    pub all_genres: Records<Genre>,
    /// Movie picked in the front end.
    pub selected_id: MovieId,
}

impl CatalogState {
    /// True when every slice is the same allocation as in `other`.
    pub fn same_as(&self, other: &Self) -> bool {
        self.movies.ptr_eq(&other.movies)
            && self.genres.ptr_eq(&other.genres)
            && self.all_genres.ptr_eq(&other.all_genres)
            && self.selected_id == other.selected_id
    }
}
