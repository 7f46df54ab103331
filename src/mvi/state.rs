//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// A screen has exactly one current state at a time; transitions replace
/// the whole value, never mutate it in place.
pub trait UiState: Clone + PartialEq + Send + Sync + 'static {}
