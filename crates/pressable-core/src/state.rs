//! Button result-state variants.

use serde::{Deserialize, Serialize};

/// Result state of a button's tracked press.
///
/// The widget holds exactly one of these at all times. `Idle` is the only
/// initial state; any state returns to `Idle` on reset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ButtonState {
    /// No tracked press has run since creation or the last reset.
    #[default]
    Idle,
    /// A tracked press is awaiting settlement.
    Pending,
    /// The most recent settlement succeeded.
    Fulfilled,
    /// The most recent settlement failed.
    Rejected,
}

impl ButtonState {
    /// A tracked press is in flight.
    pub fn is_pending(self) -> bool {
        matches!(self, ButtonState::Pending)
    }

    /// The last settlement succeeded.
    pub fn is_fulfilled(self) -> bool {
        matches!(self, ButtonState::Fulfilled)
    }

    /// The last settlement failed.
    pub fn is_rejected(self) -> bool {
        matches!(self, ButtonState::Rejected)
    }

    /// Fulfilled or rejected.
    pub fn is_settled(self) -> bool {
        self.is_fulfilled() || self.is_rejected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ButtonState::default(), ButtonState::Idle);
    }

    #[test]
    fn test_predicates() {
        assert!(!ButtonState::Idle.is_pending());
        assert!(!ButtonState::Idle.is_settled());

        assert!(ButtonState::Pending.is_pending());
        assert!(!ButtonState::Pending.is_settled());

        assert!(ButtonState::Fulfilled.is_fulfilled());
        assert!(ButtonState::Fulfilled.is_settled());
        assert!(!ButtonState::Fulfilled.is_rejected());

        assert!(ButtonState::Rejected.is_rejected());
        assert!(ButtonState::Rejected.is_settled());
        assert!(!ButtonState::Rejected.is_fulfilled());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ButtonState::Pending).unwrap();
        assert_eq!(json, "\"pending\"");

        let state: ButtonState = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(state, ButtonState::Rejected);
    }
}
