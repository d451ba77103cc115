//! Movie catalog state.
//!
//! - `state.rs` - Slices (`movies`, `genres`, `all_genres`, `selected_id`)
//! - `action.rs` - Intents and result actions
//! - `reducer.rs` - One reducer per slice plus the root reducer

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::{AllGenresReducer, CatalogReducer, GenresReducer, MoviesReducer, SelectedIdReducer};
pub use state::{CatalogState, Records};
