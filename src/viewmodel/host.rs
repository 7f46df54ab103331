//! View-model contract and the host that runs it.

use std::future::Future;

use tokio::sync::mpsc;

use crate::mvi::{ActionState, UiEvent, UiState};
use crate::viewmodel::bus::{ActionBus, ActionStream, DEFAULT_ACTION_BUFFER};
use crate::viewmodel::cell::{StateCell, StateWatcher};
use crate::viewmodel::scope::TaskScope;

/// The view-model contract.
///
/// A view-model keeps one private mutable model value. Transitions happen
/// only inside [`on_event`]; the externally visible state is re-derived
/// afterwards through the pure [`project`] function and published by the
/// host. The published state is never mutated after publication.
///
/// View-models without an action channel use [`NoAction`] as their
/// `Action` type.
///
/// [`on_event`]: ViewModel::on_event
/// [`project`]: ViewModel::project
/// [`NoAction`]: crate::mvi::NoAction
pub trait ViewModel: Send + 'static {
    /// Private mutable model, owned by the host.
    type Model: Send + 'static;

    /// Published state, derived from the model.
    type State: UiState;

    /// Inbound events from the view layer.
    type Event: UiEvent;

    /// One-shot effects emitted to the view layer.
    type Action: ActionState;

    /// Initial model value for a freshly created host.
    fn init_model(&self) -> Self::Model;

    /// Pure projection from model to published state.
    fn project(model: &Self::Model) -> Self::State;

    /// Handle one event.
    ///
    /// Must not block: long-running work goes through
    /// [`Effects::spawn`] and re-enters the model as a feedback event.
    fn on_event(
        &mut self,
        model: &mut Self::Model,
        event: Self::Event,
        effects: &Effects<Self::Event, Self::Action>,
    );
}

/// Capabilities handed to [`ViewModel::on_event`].
pub struct Effects<E: UiEvent, A: ActionState> {
    actions: ActionBus<A>,
    feedback: mpsc::UnboundedSender<E>,
    scope: TaskScope,
}

impl<E: UiEvent, A: ActionState> Effects<E, A> {
    /// Emit a one-shot action-state to every active subscriber.
    ///
    /// Fire-and-forget; having no subscribers is not an error.
    pub fn send_action(&self, action: A) {
        self.actions.send(action);
    }

    /// Spawn background work owned by the view-model.
    ///
    /// The task is aborted when the host is destroyed. It communicates
    /// back only through [`feedback`] events or [`send_action`], never by
    /// touching published state directly.
    ///
    /// [`feedback`]: Effects::feedback
    /// [`send_action`]: Effects::send_action
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.scope.spawn(future);
    }

    /// Sender used by background tasks to re-enter the event handler.
    pub fn feedback(&self) -> FeedbackSender<E> {
        FeedbackSender {
            tx: self.feedback.clone(),
        }
    }

    /// Number of spawned tasks still running.
    pub fn active_tasks(&self) -> usize {
        self.scope.active_tasks()
    }
}

/// Cloneable handle for queueing events from background work.
pub struct FeedbackSender<E: UiEvent> {
    tx: mpsc::UnboundedSender<E>,
}

impl<E: UiEvent> FeedbackSender<E> {
    /// Queue an event for the owning host.
    ///
    /// Silently dropped when the host no longer exists; a cancelled task
    /// racing its own teardown is not an error.
    pub fn send(&self, event: E) {
        if self.tx.send(event).is_err() {
            tracing::trace!("feedback event dropped: host destroyed");
        }
    }
}

impl<E: UiEvent> Clone for FeedbackSender<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Owns a view-model, its model, and both outbound channels.
///
/// `dispatch` is the single synchronous entry point for the view layer.
/// Dropping the host cancels all background work; nothing is published
/// afterwards.
pub struct ViewModelHost<V: ViewModel> {
    vm: V,
    model: V::Model,
    cell: StateCell<V::State>,
    effects: Effects<V::Event, V::Action>,
    feedback_rx: mpsc::UnboundedReceiver<V::Event>,
}

impl<V: ViewModel> ViewModelHost<V> {
    pub fn new(vm: V) -> Self {
        let model = vm.init_model();
        let cell = StateCell::new(V::project(&model));
        let (feedback_tx, feedback_rx) = mpsc::unbounded_channel();
        Self {
            vm,
            model,
            cell,
            effects: Effects {
                actions: ActionBus::new(DEFAULT_ACTION_BUFFER),
                feedback: feedback_tx,
                scope: TaskScope::new(),
            },
            feedback_rx,
        }
    }

    /// Handle one event from the view layer.
    ///
    /// Runs the handler, applies any feedback events already queued by
    /// background work, then republishes the projection. Never blocks on
    /// I/O and never fails for expected domain conditions — those travel
    /// as action-states or state fields.
    pub fn dispatch(&mut self, event: V::Event) {
        self.vm.on_event(&mut self.model, event, &self.effects);
        while let Ok(queued) = self.feedback_rx.try_recv() {
            self.vm.on_event(&mut self.model, queued, &self.effects);
        }
        if self.cell.publish(V::project(&self.model)) {
            tracing::trace!("published new ui state");
        }
    }

    /// Apply feedback events that arrived since the last dispatch.
    ///
    /// Returns the number of events applied. Call this when background
    /// work may have completed without a user event to piggyback on.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(queued) = self.feedback_rx.try_recv() {
            self.vm.on_event(&mut self.model, queued, &self.effects);
            applied += 1;
        }
        if applied > 0 {
            self.cell.publish(V::project(&self.model));
        }
        applied
    }

    /// Current published state.
    pub fn state(&self) -> V::State {
        self.cell.get()
    }

    /// Subscribe to state updates (replay-latest).
    pub fn watch_state(&self) -> StateWatcher<V::State> {
        self.cell.watch()
    }

    /// Subscribe to action-states (no replay).
    pub fn actions(&self) -> ActionStream<V::Action> {
        self.effects.actions.subscribe()
    }

    /// Sender for queueing events from outside the view layer.
    pub fn feedback(&self) -> FeedbackSender<V::Event> {
        self.effects.feedback()
    }

    /// Number of background tasks still running.
    pub fn active_tasks(&self) -> usize {
        self.effects.active_tasks()
    }
}

/// Lazily created, screen-scoped view-model host.
///
/// The host comes into existence on first access and is destroyed with
/// [`discard`] when the owning screen leaves the navigation stack for
/// good, cancelling any outstanding background work.
///
/// [`discard`]: Retained::discard
pub struct Retained<V: ViewModel> {
    factory: Box<dyn Fn() -> V + Send>,
    host: Option<ViewModelHost<V>>,
}

impl<V: ViewModel> Retained<V> {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> V + Send + 'static,
    {
        Self {
            factory: Box::new(factory),
            host: None,
        }
    }

    /// The host, created on first access.
    pub fn get(&mut self) -> &mut ViewModelHost<V> {
        if self.host.is_none() {
            tracing::debug!("creating view-model host on first access");
        }
        self.host
            .get_or_insert_with(|| ViewModelHost::new((self.factory)()))
    }

    pub fn is_created(&self) -> bool {
        self.host.is_some()
    }

    /// Destroy the host, cancelling its background work.
    pub fn discard(&mut self) {
        if self.host.take().is_some() {
            tracing::debug!("discarded view-model host");
        }
    }
}
