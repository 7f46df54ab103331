//! Single-slot, replay-latest state container.

use tokio::sync::watch;

use crate::mvi::UiState;

/// Holds the current [`UiState`] of one screen.
///
/// A single-slot container, not a queue: subscribers always see the
/// latest value immediately on subscription, then every later update in
/// emission order. A slow subscriber observes the newest value, not every
/// intermediate one.
pub struct StateCell<S: UiState> {
    tx: watch::Sender<S>,
}

impl<S: UiState> StateCell<S> {
    pub fn new(initial: S) -> Self {
        Self {
            tx: watch::Sender::new(initial),
        }
    }

    /// Read the current value.
    pub fn get(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Replace the current value and notify subscribers.
    ///
    /// Publishing a value equal to the current one is a no-op; subscribers
    /// are not re-notified. Never fails, even with zero subscribers.
    /// Returns whether the value changed.
    pub fn publish(&self, next: S) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        })
    }

    /// Subscribe; the watcher starts at the current value.
    pub fn watch(&self) -> StateWatcher<S> {
        StateWatcher {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Read side of a [`StateCell`].
pub struct StateWatcher<S: UiState> {
    rx: watch::Receiver<S>,
}

impl<S: UiState> StateWatcher<S> {
    /// The latest published value (replay-latest: available immediately,
    /// regardless of when the watcher subscribed).
    pub fn current(&self) -> S {
        self.rx.borrow().clone()
    }

    /// Wait for the next update after the last one seen.
    ///
    /// Returns `None` once the owning cell has been dropped.
    pub async fn next(&mut self) -> Option<S> {
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_) => None,
        }
    }
}
