//! Model-View-Intent (MVI) message contracts.
//!
//! This module provides the marker traits for the three message
//! categories flowing through a view-model.
//!
//! # Architecture
//!
//! ```text
//! UiEvent ──→ ViewModel ──→ UiState ──→ View
//!    ↑            │                      │
//!    │            └── ActionState ───────┤
//!    └───────────────────────────────────┘
//! ```
//!
//! - **UiState**: Immutable snapshot of everything a screen renders
//! - **UiEvent**: User actions or system events, consumed once
//! - **ActionState**: One-shot side-effect instructions (toast, navigate)

mod action;
mod event;
mod state;

pub use action::{ActionState, NoAction};
pub use event::UiEvent;
pub use state::UiState;
