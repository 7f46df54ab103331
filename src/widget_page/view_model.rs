//! Widget page view-model.

use crate::viewmodel::{Effects, ViewModel};
use crate::widget_page::action::WidgetPageAction;
use crate::widget_page::event::WidgetPageEvent;
use crate::widget_page::state::WidgetPageUiState;

#[derive(Debug, Default)]
pub struct WidgetPageViewModel;

impl ViewModel for WidgetPageViewModel {
    type Model = ();
    type State = WidgetPageUiState;
    type Event = WidgetPageEvent;
    type Action = WidgetPageAction;

    fn init_model(&self) {}

    fn project(_model: &()) -> WidgetPageUiState {
        WidgetPageUiState
    }

    fn on_event(
        &mut self,
        _model: &mut (),
        event: WidgetPageEvent,
        effects: &Effects<WidgetPageEvent, WidgetPageAction>,
    ) {
        match event {
            WidgetPageEvent::ClickToNavigateValidateCodePage => {
                effects.send_action(WidgetPageAction::NavigateToValidateCodePage);
            }
        }
    }
}
