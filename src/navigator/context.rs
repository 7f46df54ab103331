//! Application context carrying shared capabilities to screens.

use std::sync::Arc;

use thiserror::Error;

use crate::navigator::{Navigator, Route};

/// Context wiring errors. These indicate composition-root bugs, not
/// runtime conditions.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error(
        "navigator accessed without a provider; install one with \
         AppContext::with_navigator at the composition root"
    )]
    NavigatorMissing,
}

/// Explicit context passed from the composition root to screens.
///
/// The navigator is owned by the composition root and shared read-only;
/// screens never receive the concrete navigation mechanism. An empty
/// context is a valid default, but using its navigator is a wiring bug
/// and fails fast.
pub struct AppContext<R: Route> {
    navigator: Option<Arc<dyn Navigator<R>>>,
}

impl<R: Route> AppContext<R> {
    /// A context with no providers installed.
    pub fn empty() -> Self {
        Self { navigator: None }
    }

    pub fn with_navigator(navigator: Arc<dyn Navigator<R>>) -> Self {
        Self {
            navigator: Some(navigator),
        }
    }

    /// The shared navigator.
    ///
    /// # Panics
    ///
    /// Panics with a descriptive message when no navigator was provided.
    /// Use [`try_navigator`] where the caller can surface the error.
    ///
    /// [`try_navigator`]: AppContext::try_navigator
    pub fn navigator(&self) -> Arc<dyn Navigator<R>> {
        match self.try_navigator() {
            Ok(navigator) => navigator,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_navigator(&self) -> Result<Arc<dyn Navigator<R>>, ContextError> {
        self.navigator
            .clone()
            .ok_or(ContextError::NavigatorMissing)
    }

    pub fn has_navigator(&self) -> bool {
        self.navigator.is_some()
    }
}

impl<R: Route> Clone for AppContext<R> {
    fn clone(&self) -> Self {
        Self {
            navigator: self.navigator.clone(),
        }
    }
}

impl<R: Route> Default for AppContext<R> {
    fn default() -> Self {
        Self::empty()
    }
}
