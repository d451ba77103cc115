//! Actions dispatched to the catalog store.

use serde::{Deserialize, Serialize};

use crate::api::{Genre, Movie, MovieId, MovieRef, NewMovie};
use crate::mvi::Message;

use super::state::Records;

/// Every message the catalog store understands.
///
/// The first four are intents picked up by the effect coordinator; the rest
/// carry results into a slice. On the wire an action is
/// `{"type": "SET_MOVIES", "payload": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Load the full movie list.
    FetchMovies,

    /// Create a movie, then reload the list.
    AddMovie(NewMovie),

    /// Load the genres of one movie.
    FetchGenres(MovieRef),

    /// Load every known genre.
    GenreList,

    /// Replace `movies`.
    SetMovies(Records<Movie>),

    /// Replace `genres`.
    SetGenres(Records<Genre>),

    /// Replace `all_genres`.
    AllGenres(Records<Genre>),

    /// Replace `selected_id`.
    SelectedId(MovieId),
}

impl Action {
    pub fn fetch_genres(id: impl Into<MovieId>) -> Self {
        Action::FetchGenres(MovieRef { id: id.into() })
    }

    /// True for the actions the effect coordinator reacts to.
    pub fn is_intent(&self) -> bool {
        matches!(
            self,
            Action::FetchMovies | Action::AddMovie(_) | Action::FetchGenres(_) | Action::GenreList
        )
    }
}

impl Message for Action {
    fn tag(&self) -> &'static str {
        match self {
            Action::FetchMovies => "FETCH_MOVIES",
            Action::AddMovie(_) => "ADD_MOVIE",
            Action::FetchGenres(_) => "FETCH_GENRES",
            Action::GenreList => "GENRE_LIST",
            Action::SetMovies(_) => "SET_MOVIES",
            Action::SetGenres(_) => "SET_GENRES",
            Action::AllGenres(_) => "ALL_GENRES",
            Action::SelectedId(_) => "SELECTED_ID",
        }
    }
}
