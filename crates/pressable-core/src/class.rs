//! CSS class-token composition.
//!
//! Only tokens live here. Mapping a token to a visual style belongs to the
//! consumer's stylesheet.

use crate::config::ButtonConfig;
use crate::state::ButtonState;

/// Compose a prefixed class token, e.g. `prefixed("btn", "lg")` → `"btn-lg"`.
pub fn prefixed(prefix: &str, token: &str) -> String {
    format!("{prefix}-{token}")
}

/// Token for the current result state.
pub fn state_class(state: ButtonState) -> &'static str {
    match state {
        ButtonState::Idle => "idle",
        ButtonState::Pending => "pending",
        ButtonState::Fulfilled => "fulfilled",
        ButtonState::Rejected => "rejected",
    }
}

/// Token present only while the widget is active.
pub fn active_class(config: &ButtonConfig) -> Option<&'static str> {
    config.active.then_some("active")
}

/// Token present only for block-level styling.
pub fn block_class(config: &ButtonConfig) -> Option<&'static str> {
    config.block.then_some("block")
}

/// Full class list for rendering: base token, state token, then the
/// active/block tokens when applicable.
pub fn class_list(config: &ButtonConfig, state: ButtonState) -> Vec<String> {
    let mut classes = vec!["btn".to_string(), prefixed("btn", state_class(state))];
    if let Some(token) = active_class(config) {
        classes.push(prefixed("btn", token));
    }
    if let Some(token) = block_class(config) {
        classes.push(prefixed("btn", token));
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed() {
        assert_eq!(prefixed("btn", "lg"), "btn-lg");
        assert_eq!(prefixed("badge", "pill"), "badge-pill");
    }

    #[test]
    fn test_boolean_tokens() {
        let mut config = ButtonConfig::default();
        assert_eq!(active_class(&config), None);
        assert_eq!(block_class(&config), None);

        config.active = true;
        config.block = true;
        assert_eq!(active_class(&config), Some("active"));
        assert_eq!(block_class(&config), Some("block"));
    }

    #[test]
    fn test_class_list_composition() {
        let config = ButtonConfig {
            active: true,
            block: true,
            ..Default::default()
        };
        assert_eq!(
            class_list(&config, ButtonState::Pending),
            vec!["btn", "btn-pending", "btn-active", "btn-block"]
        );

        let plain = ButtonConfig::default();
        assert_eq!(
            class_list(&plain, ButtonState::Idle),
            vec!["btn", "btn-idle"]
        );
    }
}
