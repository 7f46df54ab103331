//! Events the widget page sends to its view-model.

use crate::mvi::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPageEvent {
    /// User tapped through to the validate-code page.
    ClickToNavigateValidateCodePage,
}

impl UiEvent for WidgetPageEvent {}
