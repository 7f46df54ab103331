//! uniflow: unidirectional data-flow (MVI) primitives for UI code.
//!
//! Screens observe a replay-latest state stream, dispatch events into a
//! view-model, and receive one-shot action-states for transient effects
//! such as toasts and navigation. The crate provides the reusable core
//! (message contracts, view-model host, navigator abstraction) plus two
//! illustrative feature view-models built on it.
//!
//! ```
//! use uniflow::home::{HomeEvent, HomeViewModel};
//! use uniflow::viewmodel::ViewModelHost;
//!
//! let mut host = ViewModelHost::new(HomeViewModel::default());
//! let mut actions = host.actions();
//! host.dispatch(HomeEvent::SearchChanged("rust".to_string()));
//! assert_eq!(host.state().search_input(), "rust");
//! assert_eq!(actions.try_recv(), Ok(None));
//! ```

pub mod home;
pub mod mvi;
pub mod navigator;
pub mod viewmodel;
pub mod widget_page;
