//! Core types for the Pressable button widget.
//!
//! This crate contains the plain data shared across Pressable crates:
//! - Button result state and derived predicates
//! - Per-press configuration
//! - Pure label, icon, and class-token derivations
//! - Error types

mod class;
mod config;
mod error;
mod resolve;
mod state;

pub use class::{active_class, block_class, class_list, prefixed, state_class};
pub use config::ButtonConfig;
pub use error::PressError;
pub use resolve::{resolve_icon, resolve_text};
pub use state::ButtonState;
