//! Home screen view-model.

mod action;
mod event;
mod state;
mod view_model;

pub use action::HomeAction;
pub use event::HomeEvent;
pub use state::{HomeModel, HomeUiState};
pub use view_model::{CredentialCheck, HomeViewModel, INVALID_CREDENTIALS_MESSAGE};
