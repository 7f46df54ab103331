//! Base trait for action-states (one-shot effects) in MVI architecture.

/// Marker trait for action-state objects.
///
/// An action-state is a one-shot instruction from a view-model to its
/// view: show a toast, navigate to a screen. Unlike [`UiState`] it is
/// never retained — re-subscribing must not replay past emissions, or a
/// recomposition would repeat the toast or navigation.
///
/// [`UiState`]: super::UiState
pub trait ActionState: Clone + Send + 'static {}

/// Action type for view-models that have no action channel.
///
/// Uninhabited: no value of this type can exist, so a host parameterized
/// with it can never emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAction {}

impl ActionState for NoAction {}
