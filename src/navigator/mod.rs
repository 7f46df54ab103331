//! Navigation abstraction over a closed set of screen identifiers.
//!
//! Feature code requests transitions through the [`Navigator`] trait
//! without holding the concrete navigation mechanism, so tests can
//! substitute a fake. The concrete [`ScreenStack`] keeps an in-memory
//! back stack; [`AppContext`] carries the shared navigator capability
//! from the composition root down to screens, failing fast when no
//! provider was installed.

mod context;
mod screen;
mod stack;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use context::{AppContext, ContextError};
pub use screen::Screen;
pub use stack::ScreenStack;

/// A navigation destination.
///
/// Implemented by closed enums: the set of valid destinations is known at
/// compile time, and every destination is serializable so a back stack
/// can be persisted and restored.
pub trait Route:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// Capability set for requesting screen transitions.
pub trait Navigator<R: Route>: Send + Sync {
    /// Push the given destination.
    fn navigate_to(&self, route: R);

    /// Pop the current destination. A no-op on an empty stack.
    fn navigate_back(&self);
}
