//! Error types for the Pressable widget.

use thiserror::Error;

/// Press failures.
///
/// These are surfaced only through the `Rejected` state and its derived
/// label; there is no thrown-error channel for asynchronous failures.
#[derive(Debug, Error)]
pub enum PressError {
    /// The handler's tracked work failed.
    #[error("press failed: {0}")]
    Failed(String),

    /// The handler could not run the press at all.
    #[error("press handler unavailable")]
    Unavailable,

    /// Manual settlement handle was dropped without settling.
    #[error("settlement channel closed: {0}")]
    Channel(String),
}
