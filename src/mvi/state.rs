//! Base trait for slice state.

/// Marker trait for a slice of store state.
///
/// Slices should be:
/// - Cheap to clone (shared immutable data behind `Arc`)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the value a fresh store starts with)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
