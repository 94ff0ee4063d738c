//! Observable button state with automatic change notifications.
//!
//! The key insight: mutation = notification. Every transition broadcasts the
//! new state, so a subscriber cannot miss a settlement or a reset.

use parking_lot::RwLock;
use tokio::sync::watch;

use pressable_core::ButtonState;

/// The button's result-state cell.
///
/// Holds exactly one [`ButtonState`] and broadcasts every transition via
/// `tokio::sync::watch`. Transitions here are unguarded total functions;
/// gating (the single-flight guard, teardown checks) is the dispatcher's
/// responsibility.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the cell (never poisons). The lock exists
/// because settlement tasks may run off-thread, not because the widget is
/// designed for parallel mutation - one widget instance owns one cell.
pub struct ObservableButtonState {
    inner: RwLock<ButtonState>,
    tx: watch::Sender<ButtonState>,
    rx: watch::Receiver<ButtonState>,
}

impl ObservableButtonState {
    /// Create a new cell in the `Idle` state.
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(ButtonState::Idle);
        Self {
            inner: RwLock::new(ButtonState::Idle),
            tx,
            rx,
        }
    }

    /// Enter `Pending`. Allowed from any state.
    pub fn begin_pending(&self) {
        self.set(ButtonState::Pending);
    }

    /// Apply a successful settlement.
    ///
    /// Applied unconditionally: if a reset raced ahead of the settlement, the
    /// transition still lands. That race is accepted behavior, not prevented.
    pub fn settle_fulfilled(&self) {
        self.set(ButtonState::Fulfilled);
    }

    /// Apply a failed settlement. Same race rules as [`settle_fulfilled`].
    ///
    /// [`settle_fulfilled`]: ObservableButtonState::settle_fulfilled
    pub fn settle_rejected(&self) {
        self.set(ButtonState::Rejected);
    }

    /// Force `Idle`.
    ///
    /// Idempotent, and broadcasts even when already `Idle` so repeated
    /// external assertions are each observable. Callers do not need to track
    /// whether the triggering signal's value actually changed.
    pub fn reset(&self) {
        self.set(ButtonState::Idle);
    }

    /// Read the current state.
    pub fn get(&self) -> ButtonState {
        *self.inner.read()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver sees the current state immediately and every transition
    /// after. Clone the receiver for multiple subscribers.
    pub fn subscribe(&self) -> watch::Receiver<ButtonState> {
        self.rx.clone()
    }

    fn set(&self, next: ButtonState) {
        let prev = {
            let mut inner = self.inner.write();
            std::mem::replace(&mut *inner, next)
        };
        tracing::debug!("Button state {:?} -> {:?}", prev, next);
        let _ = self.tx.send(next);
    }
}

impl Default for ObservableButtonState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let cell = ObservableButtonState::new();
        assert_eq!(cell.get(), ButtonState::Idle);
        assert_eq!(*cell.subscribe().borrow(), ButtonState::Idle);
    }

    #[test]
    fn test_transitions_broadcast() {
        let cell = ObservableButtonState::new();
        let rx = cell.subscribe();

        cell.begin_pending();
        assert_eq!(*rx.borrow(), ButtonState::Pending);

        cell.settle_fulfilled();
        assert_eq!(*rx.borrow(), ButtonState::Fulfilled);

        cell.begin_pending();
        cell.settle_rejected();
        assert_eq!(*rx.borrow(), ButtonState::Rejected);
    }

    #[test]
    fn test_reset_from_every_state() {
        for enter in [
            None,
            Some(ButtonState::Pending),
            Some(ButtonState::Fulfilled),
            Some(ButtonState::Rejected),
        ] {
            let cell = ObservableButtonState::new();
            match enter {
                Some(ButtonState::Pending) => cell.begin_pending(),
                Some(ButtonState::Fulfilled) => {
                    cell.begin_pending();
                    cell.settle_fulfilled();
                }
                Some(ButtonState::Rejected) => {
                    cell.begin_pending();
                    cell.settle_rejected();
                }
                _ => {}
            }
            cell.reset();
            assert_eq!(cell.get(), ButtonState::Idle);
        }
    }

    #[test]
    fn test_reset_is_idempotent_and_always_broadcasts() {
        let cell = ObservableButtonState::new();
        let mut rx = cell.subscribe();

        cell.reset();
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        // Already Idle; a repeated reset still notifies.
        cell.reset();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ButtonState::Idle);
    }

    #[test]
    fn test_settlement_after_reset_still_applies() {
        // Documented race: a reset that lands between begin_pending and the
        // settlement does not stop the settlement from applying.
        let cell = ObservableButtonState::new();
        cell.begin_pending();
        cell.reset();
        cell.settle_fulfilled();
        assert_eq!(cell.get(), ButtonState::Fulfilled);
    }
}
