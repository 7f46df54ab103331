//! View-model machinery: state cell, action bus, task scope, host.
//!
//! A [`ViewModelHost`] owns a private model value. Every transition
//! replaces the model, then re-derives the published [`UiState`] through
//! the view-model's pure projection. State reaches the view through a
//! replay-latest [`StateCell`]; one-shot effects reach it through a
//! no-replay [`ActionBus`]. The two channels are deliberately separate:
//! state must be idempotently re-renderable, action-states must fire at
//! most once.
//!
//! [`UiState`]: crate::mvi::UiState

mod bus;
mod cell;
mod host;
mod scope;

pub use bus::{ActionBus, ActionStream, ActionStreamError, DEFAULT_ACTION_BUFFER};
pub use cell::{StateCell, StateWatcher};
pub use host::{Effects, FeedbackSender, Retained, ViewModel, ViewModelHost};
pub use scope::TaskScope;
