//! Task ownership tied to a view-model's lifetime.

use std::future::Future;

use parking_lot::Mutex;
use tokio::task::AbortHandle;

/// Owns every background task spawned on behalf of one view-model.
///
/// Dropping the scope aborts all outstanding tasks, so no work outlives
/// its owner and nothing is published after destruction.
pub struct TaskScope {
    handles: Mutex<Vec<AbortHandle>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self {
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Spawn a task owned by this scope.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(future);
        let mut handles = self.handles.lock();
        handles.retain(|h| !h.is_finished());
        handles.push(handle.abort_handle());
    }

    /// Abort every task still running.
    pub fn cancel_all(&self) {
        let mut handles = self.handles.lock();
        let active = handles.iter().filter(|h| !h.is_finished()).count();
        if active > 0 {
            tracing::debug!(active, "cancelling outstanding view-model tasks");
        }
        for handle in handles.drain(..) {
            handle.abort();
        }
    }

    /// Number of tasks spawned and not yet finished.
    pub fn active_tasks(&self) -> usize {
        let mut handles = self.handles.lock();
        handles.retain(|h| !h.is_finished());
        handles.len()
    }
}

impl Default for TaskScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
