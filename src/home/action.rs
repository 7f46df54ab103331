//! One-shot effects the Home view-model sends to its screen.

use crate::mvi::ActionState;

#[derive(Debug, Clone, PartialEq)]
pub enum HomeAction {
    /// Show a transient message.
    Toast(String),
    /// Login succeeded; move to the logged-in destination.
    NavigateLogin { user_id: String },
    /// Navigate to the widget page.
    GotoWidgetPage,
}

impl ActionState for HomeAction {}
