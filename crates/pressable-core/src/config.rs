//! Per-press configuration for the button widget.
//!
//! Configuration is treated as immutable per press: the widget reads a
//! snapshot when an activation arrives. The one exception is `active`, which
//! the dispatcher flips when `toggle` is enabled.

use serde::{Deserialize, Serialize};

/// Everything the widget needs to know besides its result state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Opaque payload forwarded to the press handler unchanged.
    #[serde(default)]
    pub value: serde_json::Value,

    /// Flip `active` on each press, before anything else is evaluated.
    #[serde(default)]
    pub toggle: bool,

    /// Drives icon selection and the active class token.
    #[serde(default)]
    pub active: bool,

    /// Styling only; no state effect.
    #[serde(default)]
    pub block: bool,

    /// Suppress new presses while a tracked press is pending.
    #[serde(default = "default_true")]
    pub prevent_concurrency: bool,

    /// Let the activation event propagate past the widget.
    #[serde(default)]
    pub bubble: bool,

    /// When set, wins over the concurrency-derived disablement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_override: Option<bool>,

    /// Label while idle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_text: Option<String>,

    /// Label while a tracked press is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_text: Option<String>,

    /// Label after a successful settlement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfilled_text: Option<String>,

    /// Label after a failed settlement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_text: Option<String>,

    /// Fallback label when no per-state override is set.
    #[serde(default)]
    pub default_text: String,

    /// Icon token while active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_active: Option<String>,

    /// Icon token while inactive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_inactive: Option<String>,

    /// Icon token that wins regardless of `active`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_override: Option<String>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            value: serde_json::Value::Null,
            toggle: false,
            active: false,
            block: false,
            prevent_concurrency: true,
            bubble: false,
            disabled_override: None,
            idle_text: None,
            pending_text: None,
            fulfilled_text: None,
            rejected_text: None,
            default_text: String::new(),
            icon_active: None,
            icon_inactive: None,
            icon_override: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ButtonConfig::default();
        assert!(config.prevent_concurrency);
        assert!(!config.bubble);
        assert!(!config.toggle);
        assert!(config.disabled_override.is_none());
        assert_eq!(config.value, serde_json::Value::Null);
    }

    #[test]
    fn test_empty_document_deserializes_with_defaults() {
        let config: ButtonConfig = serde_json::from_str("{}").unwrap();
        assert!(config.prevent_concurrency);
        assert!(!config.bubble);
        assert_eq!(config.default_text, "");
    }

    #[test]
    fn test_partial_document_keeps_unset_defaults() {
        let config: ButtonConfig = serde_json::from_str(
            r#"{"default_text": "Save", "pending_text": "Saving…", "bubble": true}"#,
        )
        .unwrap();
        assert_eq!(config.default_text, "Save");
        assert_eq!(config.pending_text.as_deref(), Some("Saving…"));
        assert!(config.bubble);
        // Untouched fields keep their documented defaults.
        assert!(config.prevent_concurrency);
        assert!(config.idle_text.is_none());
    }
}
