//! Pure label and icon derivation.
//!
//! These are recomputed on every read. The derivations are cheap enough that
//! no cache or invalidation tracking is worth carrying.

use crate::config::ButtonConfig;
use crate::state::ButtonState;

/// Resolve the visible label for the current state.
///
/// Per-state override first, `default_text` otherwise.
pub fn resolve_text(config: &ButtonConfig, state: ButtonState) -> &str {
    let override_text = match state {
        ButtonState::Idle => config.idle_text.as_deref(),
        ButtonState::Pending => config.pending_text.as_deref(),
        ButtonState::Fulfilled => config.fulfilled_text.as_deref(),
        ButtonState::Rejected => config.rejected_text.as_deref(),
    };
    override_text.unwrap_or(&config.default_text)
}

/// Resolve the icon token.
///
/// `icon_override` always wins; otherwise `active` selects between
/// `icon_active` and `icon_inactive`.
pub fn resolve_icon(config: &ButtonConfig) -> Option<&str> {
    if let Some(icon) = config.icon_override.as_deref() {
        return Some(icon);
    }
    if config.active {
        config.icon_active.as_deref()
    } else {
        config.icon_inactive.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_config() -> ButtonConfig {
        ButtonConfig {
            default_text: "Save".to_string(),
            idle_text: Some("Save now".to_string()),
            pending_text: Some("Saving…".to_string()),
            fulfilled_text: Some("Saved".to_string()),
            rejected_text: Some("Failed".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_text_override_per_state() {
        let config = labeled_config();
        assert_eq!(resolve_text(&config, ButtonState::Idle), "Save now");
        assert_eq!(resolve_text(&config, ButtonState::Pending), "Saving…");
        assert_eq!(resolve_text(&config, ButtonState::Fulfilled), "Saved");
        assert_eq!(resolve_text(&config, ButtonState::Rejected), "Failed");
    }

    #[test]
    fn test_text_falls_back_to_default() {
        let config = ButtonConfig {
            default_text: "Save".to_string(),
            pending_text: Some("Saving…".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_text(&config, ButtonState::Idle), "Save");
        assert_eq!(resolve_text(&config, ButtonState::Pending), "Saving…");
        assert_eq!(resolve_text(&config, ButtonState::Fulfilled), "Save");
        assert_eq!(resolve_text(&config, ButtonState::Rejected), "Save");
    }

    #[test]
    fn test_icon_override_wins() {
        let config = ButtonConfig {
            active: true,
            icon_active: Some("star-filled".to_string()),
            icon_inactive: Some("star-empty".to_string()),
            icon_override: Some("lock".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_icon(&config), Some("lock"));
    }

    #[test]
    fn test_icon_follows_active() {
        let mut config = ButtonConfig {
            icon_active: Some("star-filled".to_string()),
            icon_inactive: Some("star-empty".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_icon(&config), Some("star-empty"));

        config.active = true;
        assert_eq!(resolve_icon(&config), Some("star-filled"));
    }

    #[test]
    fn test_icon_absent_when_unconfigured() {
        let config = ButtonConfig::default();
        assert_eq!(resolve_icon(&config), None);
    }
}
