//! Unidirectional data flow primitives.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                  │
//!    └──── Effects (async, via store) ──┘
//! ```
//!
//! - **State**: one immutable slice of the aggregate store state
//! - **Action**: intent or result message, tagged
//! - **Reducer**: pure `(State, &Action) -> State`

mod action;
mod reducer;
mod state;

pub use action::Message;
pub use reducer::Reducer;
pub use state::SliceState;
