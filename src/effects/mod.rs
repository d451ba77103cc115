//! Effect coordinator: turns intent actions into backend calls.
//!
//! ```text
//! dispatch(FETCH_MOVIES) ─→ store ─→ IntentTap ─→ watcher task
//!                                                    │ spawn per intent
//!                                                    ▼
//!                 store.dispatch(SET_MOVIES) ←── effect task ──→ GET /api/movie
//! ```
//!
//! Every occurrence of a watched intent gets its own task. There is no
//! deduplication, throttling, retry or cancellation. A failed effect is
//! logged and dispatches nothing.

mod handlers;
mod tracker;

pub use handlers::perform;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::CatalogApi;
use crate::catalog::{Action, CatalogState};
use crate::mvi::Message;
use crate::store::{Middleware, Store};

use tracker::InFlight;

pub struct EffectCoordinator<A> {
    store: Store,
    api: Arc<A>,
}

impl<A: CatalogApi> EffectCoordinator<A> {
    pub fn new(store: Store, api: A) -> Self {
        Self {
            store,
            api: Arc::new(api),
        }
    }

    /// Register the coordinator on the store and spawn the watcher task.
    ///
    /// Must be called from within a tokio runtime. Call once per store; the
    /// watcher lives as long as the store does. Intents dispatched after
    /// this returns are never missed.
    pub fn start(self) -> EffectHandle {
        let (sender, receiver) = mpsc::unbounded_channel();
        let in_flight = InFlight::default();

        self.store.add_middleware(Arc::new(IntentTap {
            sender,
            in_flight: in_flight.clone(),
        }));

        tokio::spawn(watch(self.store, self.api, receiver, in_flight.clone()));
        tracing::debug!("Effect coordinator started");

        EffectHandle { in_flight }
    }
}

/// Observes the coordinator started by [`EffectCoordinator::start`].
#[derive(Clone)]
pub struct EffectHandle {
    in_flight: InFlight,
}

impl EffectHandle {
    /// Number of watched intents queued or running right now.
    pub fn in_flight(&self) -> usize {
        self.in_flight.current()
    }

    /// Resolves once no watched intent is queued or running.
    ///
    /// Follow-up intents (e.g. the `FETCH_MOVIES` after `ADD_MOVIE`) are
    /// counted before their parent finishes, so this waits for the whole
    /// chain. It never cancels anything; a hung request keeps it pending.
    pub async fn wait_idle(&self) {
        self.in_flight.wait_idle().await;
    }
}

/// Middleware forwarding watched intents to the watcher task.
struct IntentTap {
    sender: mpsc::UnboundedSender<Action>,
    in_flight: InFlight,
}

impl Middleware for IntentTap {
    fn after_dispatch(&self, action: &Action, _previous: &CatalogState, _current: &CatalogState) {
        if !action.is_intent() {
            return;
        }

        self.in_flight.begin();
        if self.sender.send(action.clone()).is_err() {
            self.in_flight.end();
            tracing::warn!(action = action.tag(), "Effect watcher gone, intent dropped");
        }
    }
}

async fn watch<A: CatalogApi>(
    store: Store,
    api: Arc<A>,
    mut receiver: mpsc::UnboundedReceiver<Action>,
    in_flight: InFlight,
) {
    while let Some(intent) = receiver.recv().await {
        let store = store.clone();
        let api = Arc::clone(&api);
        let in_flight = in_flight.clone();

        tokio::spawn(async move {
            let _done = scopeguard::guard(in_flight, |in_flight| in_flight.end());
            run_effect(&store, api.as_ref(), intent).await;
        });
    }
    tracing::debug!("Effect watcher stopped");
}

async fn run_effect<A: CatalogApi>(store: &Store, api: &A, intent: Action) {
    let span = tracing::debug_span!("effect", id = %Uuid::new_v4(), action = intent.tag());

    async move {
        tracing::debug!("Effect started");
        match perform(api, intent).await {
            Ok(Some(follow_up)) => {
                tracing::debug!(dispatch = follow_up.tag(), "Effect succeeded");
                store.dispatch(follow_up);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    kind = err.kind(),
                    endpoint = err.endpoint(),
                    "Effect failed, state left unchanged"
                );
            }
        }
    }
    .instrument(span)
    .await
}
