//! Async-aware button widget core.
//!
//! This crate provides the stateful half of Pressable:
//! - Observable result-state machine (idle → pending → fulfilled/rejected)
//! - Click dispatch with a single-flight concurrency guard
//! - Press-handler contract for tracked (future) and untracked presses
//! - External reset-signal controller
//!
//! Rendering is out of scope. Consumers read the derived surface (label,
//! icon token, class tokens) from [`Button`] and draw it however they want.

pub mod dispatch;
pub mod event;
pub mod press;
pub mod reset;
pub mod state;

// Re-export commonly used types
pub use dispatch::{Button, PressReport};
pub use event::ActivationEvent;
pub use press::{PressContext, PressHandler, PressOutcome, Settler};
pub use reset::ResetController;
pub use state::ObservableButtonState;

// Re-export pressable_core types for convenience
pub use pressable_core::{ButtonConfig, ButtonState, PressError};
