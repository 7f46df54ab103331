mod common;

use std::sync::Arc;

use common::{drain_actions, NavCall, RecordingNavigator};
use uniflow::navigator::{AppContext, Screen};
use uniflow::viewmodel::ViewModelHost;
use uniflow::widget_page::{WidgetPageAction, WidgetPageEvent, WidgetPageUiState, WidgetPageViewModel};

#[test]
fn click_emits_exactly_one_navigate_action() {
    let mut host = ViewModelHost::new(WidgetPageViewModel);
    let mut actions = host.actions();

    host.dispatch(WidgetPageEvent::ClickToNavigateValidateCodePage);

    assert_eq!(
        drain_actions(&mut actions),
        vec![WidgetPageAction::NavigateToValidateCodePage]
    );
}

#[test]
fn state_is_the_minimal_unit_state() {
    let mut host = ViewModelHost::new(WidgetPageViewModel);
    assert_eq!(host.state(), WidgetPageUiState);
    host.dispatch(WidgetPageEvent::ClickToNavigateValidateCodePage);
    assert_eq!(host.state(), WidgetPageUiState);
}

#[test]
fn navigate_action_drives_the_validate_code_screen() {
    let navigator = Arc::new(RecordingNavigator::<Screen>::new());
    let context = AppContext::with_navigator(navigator.clone());

    let mut host = ViewModelHost::new(WidgetPageViewModel);
    let mut actions = host.actions();
    host.dispatch(WidgetPageEvent::ClickToNavigateValidateCodePage);

    for action in drain_actions(&mut actions) {
        match action {
            WidgetPageAction::NavigateToValidateCodePage => {
                context.navigator().navigate_to(Screen::ValidateCodePage);
            }
        }
    }

    assert_eq!(navigator.calls(), vec![NavCall::To(Screen::ValidateCodePage)]);
}
