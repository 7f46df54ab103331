//! One-shot effects the widget page view-model sends to its screen.

use crate::mvi::ActionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPageAction {
    /// Navigate to the validate-code page.
    NavigateToValidateCodePage,
}

impl ActionState for WidgetPageAction {}
