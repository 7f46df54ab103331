//! Widget page state.

use crate::mvi::UiState;

/// Published state of the widget page.
///
/// The page is purely interactive for now, so its state carries nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetPageUiState;

impl UiState for WidgetPageUiState {}
