//! Reducer trait.

use super::action::Message;
use super::state::SliceState;

/// Reducer transforms one slice of state based on a dispatched message.
///
/// The reducer is the only place where a slice changes. It must be a pure
/// function: `(State, &Message) -> State`. Messages it does not handle must
/// return the input state as-is, not a copy.
pub trait Reducer {
    /// The slice this reducer owns.
    type State: SliceState;

    /// The message type this reducer observes.
    type Message: Message;

    /// Process a message and return the next slice value.
    fn reduce(state: Self::State, message: &Self::Message) -> Self::State;
}
