//! Fan-out broadcast channel for action-states.

use thiserror::Error;
use tokio::sync::broadcast;

use crate::mvi::ActionState;

/// Per-subscriber buffer size used by hosts.
pub const DEFAULT_ACTION_BUFFER: usize = 16;

/// Errors observed by an [`ActionStream`] subscriber.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActionStreamError {
    /// The subscriber fell behind and `n` emissions were discarded.
    #[error("action stream lagged, {0} emissions skipped")]
    Lagged(u64),

    /// The emitting view-model has been destroyed.
    #[error("action stream closed")]
    Closed,
}

/// Broadcast channel carrying [`ActionState`] values to active
/// subscribers.
///
/// No replay: a subscriber only observes emissions made after it
/// subscribed. With several active subscribers, each receives every
/// emission (fan-out). An emission with no subscriber at all is dropped —
/// that loss is inherent to the strict-broadcast policy.
pub struct ActionBus<A: ActionState> {
    tx: broadcast::Sender<A>,
}

impl<A: ActionState> ActionBus<A> {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Enqueue an action-state for every active subscriber.
    ///
    /// Fire-and-forget: the caller does not block on delivery, and
    /// "no subscribers" is not an error.
    pub fn send(&self, action: A) {
        if self.tx.send(action).is_err() {
            tracing::trace!("action-state dropped: no active subscribers");
        }
    }

    /// Subscribe; only emissions after this call are delivered.
    pub fn subscribe(&self) -> ActionStream<A> {
        ActionStream {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<A: ActionState> Clone for ActionBus<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Receiving side of an [`ActionBus`] subscription.
pub struct ActionStream<A: ActionState> {
    rx: broadcast::Receiver<A>,
}

impl<A: ActionState> ActionStream<A> {
    /// Wait for the next emission.
    pub async fn recv(&mut self) -> Result<A, ActionStreamError> {
        match self.rx.recv().await {
            Ok(action) => Ok(action),
            Err(broadcast::error::RecvError::Lagged(n)) => Err(ActionStreamError::Lagged(n)),
            Err(broadcast::error::RecvError::Closed) => Err(ActionStreamError::Closed),
        }
    }

    /// Take the next buffered emission without waiting.
    ///
    /// `Ok(None)` means no emission is currently pending.
    pub fn try_recv(&mut self) -> Result<Option<A>, ActionStreamError> {
        match self.rx.try_recv() {
            Ok(action) => Ok(Some(action)),
            Err(broadcast::error::TryRecvError::Empty) => Ok(None),
            Err(broadcast::error::TryRecvError::Lagged(n)) => Err(ActionStreamError::Lagged(n)),
            Err(broadcast::error::TryRecvError::Closed) => Err(ActionStreamError::Closed),
        }
    }
}
