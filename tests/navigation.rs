mod common;

use std::sync::Arc;

use common::{NavCall, RecordingNavigator};
use uniflow::navigator::{AppContext, ContextError, Navigator, Screen, ScreenStack};

#[test]
fn navigate_to_pushes_and_back_pops() {
    let nav = ScreenStack::new(Screen::Home);
    nav.navigate_to(Screen::Widget);
    nav.navigate_to(Screen::ValidateCodePage);
    assert_eq!(nav.depth(), 3);
    assert_eq!(nav.current(), Some(Screen::ValidateCodePage));

    nav.navigate_back();
    assert_eq!(nav.current(), Some(Screen::Widget));
}

#[test]
fn back_on_empty_stack_is_not_an_error() {
    let nav = ScreenStack::<Screen>::empty();
    nav.navigate_back();
    nav.navigate_back();
    assert_eq!(nav.depth(), 0);
}

#[test]
fn screen_identifiers_serialize_to_stable_names() {
    let encoded = serde_json::to_string(&Screen::ValidateCodePage).expect("serialize");
    assert_eq!(encoded, "\"ValidateCodePage\"");
    let decoded: Screen = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, Screen::ValidateCodePage);
}

#[test]
fn back_stack_survives_snapshot_and_restore() {
    let nav = ScreenStack::new(Screen::Home);
    nav.navigate_to(Screen::Widget);

    let snapshot = nav.snapshot().expect("snapshot");
    let restored = ScreenStack::<Screen>::restore(&snapshot).expect("restore");

    assert_eq!(restored.depth(), 2);
    assert_eq!(restored.current(), Some(Screen::Widget));
}

#[test]
fn context_hands_out_the_installed_navigator() {
    let recorder = Arc::new(RecordingNavigator::<Screen>::new());
    let context = AppContext::with_navigator(recorder.clone());
    assert!(context.has_navigator());

    context.navigator().navigate_to(Screen::Widget);
    context.navigator().navigate_back();

    assert_eq!(
        recorder.calls(),
        vec![NavCall::To(Screen::Widget), NavCall::Back]
    );
}

#[test]
fn try_navigator_reports_missing_provider() {
    let context = AppContext::<Screen>::empty();
    assert!(!context.has_navigator());
    assert!(matches!(
        context.try_navigator(),
        Err(ContextError::NavigatorMissing)
    ));
}

#[test]
#[should_panic(expected = "navigator accessed without a provider")]
fn navigator_access_without_provider_fails_fast() {
    let context = AppContext::<Screen>::empty();
    let _ = context.navigator();
}
