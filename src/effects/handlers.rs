//! One handler per watched intent.

use crate::api::{ApiError, CatalogApi};
use crate::catalog::Action;

/// Perform the backend call for `intent` and build the follow-up action.
///
/// Returns `Ok(None)` for actions that are not watched intents.
pub async fn perform<A: CatalogApi>(api: &A, intent: Action) -> Result<Option<Action>, ApiError> {
    let follow_up = match intent {
        Action::FetchMovies => Action::SetMovies(api.list_movies().await?.into()),
        Action::AddMovie(movie) => {
            api.add_movie(&movie).await?;
            Action::FetchMovies
        }
        Action::FetchGenres(movie) => Action::SetGenres(api.genre_details(&movie.id).await?.into()),
        Action::GenreList => Action::AllGenres(api.list_genres().await?.into()),
        Action::SetMovies(_)
        | Action::SetGenres(_)
        | Action::AllGenres(_)
        | Action::SelectedId(_) => return Ok(None),
    };
    Ok(Some(follow_up))
}
