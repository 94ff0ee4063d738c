//! Activation events and propagation control.

/// A single user activation of the widget (click, key press, tap).
///
/// The widget does not know or care where the event came from; it only
/// controls whether the event keeps propagating to enclosing handlers.
#[derive(Debug, Default)]
pub struct ActivationEvent {
    propagation_stopped: bool,
}

impl ActivationEvent {
    /// Create a fresh, still-propagating event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the event from reaching enclosing handlers.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether propagation has been stopped.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
