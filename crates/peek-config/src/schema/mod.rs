//! Configuration schema types for QuickPeek.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod player;
mod window;

pub use logging::*;
pub use player::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PeekConfig {
    pub window: WindowConfig,
    pub settings_dialog: DialogConfig,
    pub player: PlayerConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: PeekConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 1000);
        assert_eq!(config.window.height, 750);
        assert_eq!(config.settings_dialog.width, 450);
        assert_eq!(config.player.default_url, "https://www.baidu.com");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let toml_str = r#"
[window]
title = "Peek"

[player]
bounds_slack = 2.5
isolation_enabled = false
"#;
        let config: PeekConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.window.title, "Peek");
        assert_eq!(config.window.width, 1000);
        assert!((config.player.bounds_slack - 2.5).abs() < f64::EPSILON);
        assert!(!config.player.isolation_enabled);
        assert_eq!(config.player.isolation_delay_ms, 2500);
    }

    #[test]
    fn default_config_serializes_to_toml() {
        let out = toml::to_string_pretty(&PeekConfig::default()).unwrap();
        assert!(out.contains("[window]"));
        assert!(out.contains("[player]"));
        let back: PeekConfig = toml::from_str(&out).unwrap();
        assert_eq!(back.player.fallback_url, "https://www.baidu.com");
    }
}
