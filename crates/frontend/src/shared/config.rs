//! UI configuration.
//!
//! Defaults are embedded below. A TOML override can be stored in
//! localStorage under `qa-ui-config`; unknown keys are ignored and missing
//! keys keep their defaults.

use contracts::shared::error::UiError;
use serde::Deserialize;
use std::str::FromStr;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub log_level: String,
    pub default_tab: String,
    pub toast_timeout_ms: u32,
    pub max_toasts: usize,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
log_level = "debug"
default_tab = "overview"
toast_timeout_ms = 4000
max_toasts = 5
"#;

const CONFIG_STORAGE_KEY: &str = "qa-ui-config";

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            default_tab: "overview".to_string(),
            toast_timeout_ms: 4000,
            max_toasts: 5,
        }
    }
}

impl UiConfig {
    pub fn parse(contents: &str) -> Result<Self, UiError> {
        toml::from_str(contents).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Log level for `console_log`; unknown names fall back to `Debug`.
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Debug)
    }
}

fn load_override_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
}

/// Load configuration: stored override first, embedded default otherwise.
///
/// Called before logging is initialised, so failures are returned alongside
/// the config and logged by the caller.
pub fn load_config() -> (UiConfig, Option<UiError>) {
    if let Some(contents) = load_override_from_storage() {
        match UiConfig::parse(&contents) {
            Ok(config) => return (config, None),
            Err(e) => return (default_config(), Some(e)),
        }
    }
    (default_config(), None)
}

fn default_config() -> UiConfig {
    UiConfig::parse(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = UiConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = UiConfig::parse("default_tab = \"calls\"").unwrap();
        assert_eq!(config.default_tab, "calls");
        assert_eq!(config.toast_timeout_ms, 4000);
        assert_eq!(config.max_toasts, 5);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let err = UiConfig::parse("toast_timeout_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }

    #[test]
    fn test_level_parsing() {
        let mut config = UiConfig::default();
        config.log_level = "warn".to_string();
        assert_eq!(config.level(), log::Level::Warn);
        config.log_level = "chatty".to_string();
        assert_eq!(config.level(), log::Level::Debug);
    }
}
