//! Slice reducers and the root reducer combining them.

use crate::api::{Genre, Movie, MovieId};
use crate::mvi::Reducer;

use super::action::Action;
use super::state::{CatalogState, Records};

/// Owns `movies`; replaced on `SET_MOVIES`.
pub struct MoviesReducer;

impl Reducer for MoviesReducer {
    type State = Records<Movie>;
    type Message = Action;

    fn reduce(state: Self::State, action: &Self::Message) -> Self::State {
        match action {
            Action::SetMovies(movies) => movies.clone(),
            _ => state,
        }
    }
}

/// Owns `genres`; replaced on `SET_GENRES`.
pub struct GenresReducer;

impl Reducer for GenresReducer {
    type State = Records<Genre>;
    type Message = Action;

    fn reduce(state: Self::State, action: &Self::Message) -> Self::State {
        match action {
            Action::SetGenres(genres) => genres.clone(),
            _ => state,
        }
    }
}

/// Owns `all_genres`; replaced on `ALL_GENRES`.
pub struct AllGenresReducer;

impl Reducer for AllGenresReducer {
    type State = Records<Genre>;
    type Message = Action;

    fn reduce(state: Self::State, action: &Self::Message) -> Self::State {
        match action {
            Action::AllGenres(genres) => genres.clone(),
            _ => state,
        }
    }
}

/// Owns `selected_id`; replaced on `SELECTED_ID`.
pub struct SelectedIdReducer;

impl Reducer for SelectedIdReducer {
    type State = MovieId;
    type Message = Action;

    fn reduce(state: Self::State, action: &Self::Message) -> Self::State {
        match action {
            Action::SelectedId(id) => id.clone(),
            _ => state,
        }
    }
}

/// Runs every slice reducer against the same action.
pub struct CatalogReducer;

impl CatalogReducer {
    pub fn reduce(state: CatalogState, action: &Action) -> CatalogState {
        CatalogState {
            movies: MoviesReducer::reduce(state.movies, action),
            genres: GenresReducer::reduce(state.genres, action),
            all_genres: AllGenresReducer::reduce(state.all_genres, action),
            selected_id: SelectedIdReducer::reduce(state.selected_id, action),
        }
    }
}
