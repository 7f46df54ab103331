//! Events the Home screen sends to its view-model.

use crate::mvi::UiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum HomeEvent {
    /// Reload the data list.
    Refresh,
    /// User edited the search input.
    SearchChanged(String),
    /// User submitted credentials.
    Login { username: String, password: String },
    /// User asked for the widget page.
    GotoWidgetPage,
}

impl UiEvent for HomeEvent {}
