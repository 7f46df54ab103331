//! In-memory back stack implementation of [`Navigator`].

use parking_lot::Mutex;

use crate::navigator::{Navigator, Route};

/// Concrete navigator backed by a plain stack of routes.
///
/// The library analogue of a platform navigation controller: pushes on
/// [`navigate_to`], pops on [`navigate_back`]. The stack is serializable
/// through [`snapshot`]/[`restore`] so a host application can persist it
/// across restarts.
///
/// [`navigate_to`]: Navigator::navigate_to
/// [`navigate_back`]: Navigator::navigate_back
/// [`snapshot`]: ScreenStack::snapshot
/// [`restore`]: ScreenStack::restore
pub struct ScreenStack<R: Route> {
    stack: Mutex<Vec<R>>,
}

impl<R: Route> ScreenStack<R> {
    /// A stack holding the given start destination.
    pub fn new(root: R) -> Self {
        Self {
            stack: Mutex::new(vec![root]),
        }
    }

    /// A stack with no destinations at all.
    pub fn empty() -> Self {
        Self {
            stack: Mutex::new(Vec::new()),
        }
    }

    /// The destination on top of the stack, if any.
    pub fn current(&self) -> Option<R> {
        self.stack.lock().last().cloned()
    }

    pub fn depth(&self) -> usize {
        self.stack.lock().len()
    }

    /// Serialize the back stack for persistence.
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(&*self.stack.lock())
    }

    /// Rebuild a stack from a [`snapshot`].
    ///
    /// [`snapshot`]: ScreenStack::snapshot
    pub fn restore(snapshot: &str) -> serde_json::Result<Self> {
        let stack: Vec<R> = serde_json::from_str(snapshot)?;
        Ok(Self {
            stack: Mutex::new(stack),
        })
    }
}

impl<R: Route> Navigator<R> for ScreenStack<R> {
    fn navigate_to(&self, route: R) {
        tracing::debug!(route = ?route, "navigate to");
        self.stack.lock().push(route);
    }

    fn navigate_back(&self) {
        let mut stack = self.stack.lock();
        match stack.pop() {
            Some(route) => tracing::debug!(route = ?route, "navigate back"),
            None => tracing::trace!("navigate back on empty stack ignored"),
        }
    }
}
