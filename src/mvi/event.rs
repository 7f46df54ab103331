//! Base trait for events (user/system intents) in MVI architecture.

/// Marker trait for event objects.
///
/// Events represent:
/// - User actions (button clicks, form submissions)
/// - System events (timers, background-work completions)
///
/// Events are consumed exactly once by a view-model's event handler.
/// Per-feature event sets are closed enums, so `match` exhaustiveness
/// covers every variant at compile time.
pub trait UiEvent: Send + 'static {}
