//! Observers invoked with every dispatched action.

use crate::catalog::{Action, CatalogState};
use crate::mvi::Message;

/// Hook run after an action has been reduced and subscribers notified.
///
/// Middleware observes; it cannot veto or rewrite actions. It may dispatch
/// further actions through its own store handle.
pub trait Middleware: Send + Sync {
    fn after_dispatch(&self, action: &Action, previous: &CatalogState, current: &CatalogState);
}

/// Logs every action and the resulting slice sizes.
pub struct ActionLogger;

impl Middleware for ActionLogger {
    fn after_dispatch(&self, action: &Action, previous: &CatalogState, current: &CatalogState) {
        tracing::debug!(
            action = action.tag(),
            changed = !current.same_as(previous),
            movies = current.movies.len(),
            genres = current.genres.len(),
            all_genres = current.all_genres.len(),
            selected_id = %current.selected_id,
            "Dispatched"
        );
        tracing::trace!(?action, "Action payload");
    }
}
