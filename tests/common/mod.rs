//! Shared test utilities and fakes.

#![allow(dead_code)]

use parking_lot::Mutex;
use uniflow::mvi::ActionState;
use uniflow::navigator::{Navigator, Route};
use uniflow::viewmodel::ActionStream;

/// Every call observed by a [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavCall<R> {
    To(R),
    Back,
}

/// Navigator fake that records every call for assertions.
pub struct RecordingNavigator<R: Route> {
    calls: Mutex<Vec<NavCall<R>>>,
}

impl<R: Route> RecordingNavigator<R> {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<NavCall<R>> {
        self.calls.lock().clone()
    }
}

impl<R: Route> Navigator<R> for RecordingNavigator<R> {
    fn navigate_to(&self, route: R) {
        self.calls.lock().push(NavCall::To(route));
    }

    fn navigate_back(&self) {
        self.calls.lock().push(NavCall::Back);
    }
}

/// Install a test log subscriber honoring `RUST_LOG`. Idempotent.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Drain everything currently buffered on an action subscription.
pub fn drain_actions<A: ActionState>(stream: &mut ActionStream<A>) -> Vec<A> {
    let mut drained = Vec::new();
    while let Ok(Some(action)) = stream.try_recv() {
        drained.push(action);
    }
    drained
}
