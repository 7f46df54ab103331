//! The application's closed set of screens.

use serde::{Deserialize, Serialize};

use crate::navigator::Route;

/// Every navigable screen.
///
/// Closed at compile time: adding a destination means adding a variant,
/// and exhaustive matches flag every call site that needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Home,
    Widget,
    ValidateCodePage,
}

impl Route for Screen {}
