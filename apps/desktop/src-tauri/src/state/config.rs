//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TALLY_*`)
//! 2. Defaults (this file)
//!
//! There is no config file and nothing is persisted; the calculator starts
//! identically on every launch.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// ## Fields
/// All fields have sensible defaults; the environment overrides exist for
/// development and window-manager quirks, not for end-user theming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Window title.
    pub window_title: String,

    /// Raise the window briefly at launch so it never opens behind others.
    pub raise_on_launch: bool,

    /// Forward keyboard events to the calculator.
    /// Disable with `TALLY_KEYBOARD=0` if a window manager grabs the keys.
    pub keyboard_input: bool,
}

impl Default for ConfigState {
    /// Returns the default configuration.
    ///
    /// ## Default Values
    /// - Title: "Tally"
    /// - Raise on launch: enabled
    /// - Keyboard input: enabled
    fn default() -> Self {
        ConfigState {
            window_title: "Tally".to_string(),
            raise_on_launch: true,
            keyboard_input: true,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TALLY_TITLE`: Override the window title
    /// - `TALLY_RAISE_ON_LAUNCH`: "0"/"false" disables the launch raise
    /// - `TALLY_KEYBOARD`: "0"/"false" disables keyboard forwarding
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(title) = std::env::var("TALLY_TITLE") {
            config.window_title = title;
        }

        if let Ok(value) = std::env::var("TALLY_RAISE_ON_LAUNCH") {
            config.raise_on_launch = parse_flag(&value, config.raise_on_launch);
        }

        if let Ok(value) = std::env::var("TALLY_KEYBOARD") {
            config.keyboard_input = parse_flag(&value, config.keyboard_input);
        }

        config
    }
}

/// Parses a boolean-ish env value; unrecognized text keeps the default.
fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.window_title, "Tally");
        assert!(config.raise_on_launch);
        assert!(config.keyboard_input);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1", false));
        assert!(parse_flag("TRUE", false));
        assert!(!parse_flag("0", true));
        assert!(!parse_flag("off", true));
        // Unrecognized text keeps the default
        assert!(parse_flag("maybe", true));
        assert!(!parse_flag("maybe", false));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["windowTitle"], "Tally");
        assert_eq!(json["raiseOnLaunch"], true);
        assert_eq!(json["keyboardInput"], true);
    }
}
