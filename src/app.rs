//! Startup wiring: one store, one effect coordinator.

use std::sync::Arc;

use crate::api::{CatalogApi, HttpCatalogApi};
use crate::catalog::{Action, CatalogState};
use crate::config::Config;
use crate::effects::{EffectCoordinator, EffectHandle};
use crate::store::{ActionLogger, Store};

/// The application context handed to the front end.
///
/// Create once at startup; it lives for the rest of the process.
pub struct App {
    store: Store,
    effects: EffectHandle,
}

impl App {
    /// Build the store, install the action logger and start the effect
    /// coordinator over `api`. Must run inside a tokio runtime.
    pub fn start<A: CatalogApi>(api: A) -> Self {
        let store = Store::new();
        store.add_middleware(Arc::new(ActionLogger));
        let effects = EffectCoordinator::new(store.clone(), api).start();
        Self { store, effects }
    }

    /// [`App::start`] over the HTTP backend described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let api = HttpCatalogApi::new(&config.api)?;
        tracing::info!(base_url = api.base_url(), "Catalog backend configured");
        Ok(Self::start(api))
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn effects(&self) -> &EffectHandle {
        &self.effects
    }

    pub fn dispatch(&self, action: Action) {
        self.store.dispatch(action);
    }

    pub fn state(&self) -> CatalogState {
        self.store.state()
    }

    /// Wait until every dispatched intent and its follow-ups have finished.
    pub async fn settle(&self) {
        self.effects.wait_idle().await;
    }
}
