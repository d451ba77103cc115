//! Base trait for dispatched messages.

/// Marker trait for messages a store can dispatch.
///
/// Messages are either intents (a request for something to happen, usually
/// picked up by an effect) or results (data to put into state). Every
/// message carries a stable tag used for logging and for wire encoding.
pub trait Message: Clone + Send + Sync + 'static {
    /// Stable tag, e.g. `"SET_MOVIES"`.
    fn tag(&self) -> &'static str;
}
