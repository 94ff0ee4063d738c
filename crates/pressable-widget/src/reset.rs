//! External reset-signal controller.
//!
//! The reset signal is an event stream, not a value-equality-gated observer:
//! `watch::Sender::send` notifies even when the value is unchanged, so every
//! truthy assertion forces a reset - including back-to-back re-assertions of
//! `true`.

use std::sync::Weak;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::dispatch::{Button, Inner};

/// Drives a button back to `Idle` whenever an external signal asserts truthy.
pub struct ResetController;

impl ResetController {
    /// Spawn the observer task.
    ///
    /// Resets immediately if the signal is already truthy at attach time,
    /// then on every subsequent truthy assertion. The task exits when the
    /// sender is dropped or the widget is gone. Resetting never cancels
    /// in-flight work; it only forces the state back to `Idle`.
    pub fn spawn(mut rx: watch::Receiver<bool>, button: &Button) -> JoinHandle<()> {
        let weak = button.downgrade();
        tokio::spawn(async move {
            if *rx.borrow_and_update() && !reset_target(&weak) {
                return;
            }
            while rx.changed().await.is_ok() {
                if !*rx.borrow() {
                    continue;
                }
                if !reset_target(&weak) {
                    return;
                }
            }
            tracing::debug!("Reset signal closed; controller exiting");
        })
    }
}

/// Reset the widget behind `weak`. Returns false when the widget is gone.
fn reset_target(weak: &Weak<Inner>) -> bool {
    let Some(inner) = weak.upgrade() else {
        tracing::debug!("Reset signal for dropped widget; controller exiting");
        return false;
    };
    if !inner.is_alive() {
        tracing::debug!("Reset signal after teardown; controller exiting");
        return false;
    }
    inner.state.reset();
    true
}
