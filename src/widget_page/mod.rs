//! Widget page view-model.

mod action;
mod event;
mod state;
mod view_model;

pub use action::WidgetPageAction;
pub use event::WidgetPageEvent;
pub use state::WidgetPageUiState;
pub use view_model::WidgetPageViewModel;
