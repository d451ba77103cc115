//! The catalog store.
//!
//! One instance per process, created at startup and handed to the front end
//! and to the effect coordinator. `Store` is a cheap handle; clones share
//! the same state.

mod middleware;

pub use middleware::{ActionLogger, Middleware};

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use crate::catalog::{Action, CatalogReducer, CatalogState};

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&CatalogState) + Send + Sync>;

/// Shared handle to the catalog state, its subscribers and middleware.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct Pending {
    draining: bool,
    queue: VecDeque<Action>,
}

struct StoreInner {
    /// Serialises dispatches across threads. Re-entrant so a subscriber or
    /// middleware may dispatch from inside a dispatch; such actions wait in
    /// the queue until the running one has notified everyone.
    dispatch_gate: ReentrantMutex<RefCell<Pending>>,
    state: Mutex<CatalogState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    middleware: RwLock<Vec<Arc<dyn Middleware>>>,
    next_subscription: AtomicU64,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(CatalogState::default())
    }

    pub fn with_state(state: CatalogState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                dispatch_gate: ReentrantMutex::new(RefCell::new(Pending::default())),
                state: Mutex::new(state),
                listeners: Mutex::new(Vec::new()),
                middleware: RwLock::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
            }),
        }
    }

    /// Current aggregate state.
    pub fn state(&self) -> CatalogState {
        self.inner.state.lock().clone()
    }

    /// Reduce `action` into the state, notify subscribers in registration
    /// order, then pass the action to each middleware.
    ///
    /// Runs to completion on the calling thread. Locks on state and the
    /// listener list are released before any callback runs. An action
    /// dispatched from inside a callback is applied after the current one
    /// has reached every subscriber and middleware, and before the outer
    /// call returns.
    pub fn dispatch(&self, action: Action) {
        let gate = self.inner.dispatch_gate.lock();
        {
            let mut pending = gate.borrow_mut();
            pending.queue.push_back(action);
            if pending.draining {
                return;
            }
            pending.draining = true;
        }

        let _reset = scopeguard::guard((), |_| {
            let mut pending = gate.borrow_mut();
            pending.draining = false;
            pending.queue.clear();
        });

        loop {
            let next = gate.borrow_mut().queue.pop_front();
            match next {
                Some(action) => self.apply(&action),
                None => break,
            }
        }
    }

    fn apply(&self, action: &Action) {
        let (previous, current) = {
            let mut state = self.inner.state.lock();
            let previous = state.clone();
            let current = CatalogReducer::reduce(std::mem::take(&mut *state), action);
            *state = current.clone();
            (previous, current)
        };

        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&current);
        }

        let middleware = self.inner.middleware.read().clone();
        for m in middleware {
            m.after_dispatch(action, &previous, &current);
        }
    }

    /// Register a state listener. It is called after every dispatch.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&CatalogState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn add_middleware(&self, middleware: Arc<dyn Middleware>) {
        self.inner.middleware.write().push(middleware);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
