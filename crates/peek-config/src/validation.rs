//! Configuration validation.
//!
//! Checks numeric ranges and URL formats, collecting every problem into a
//! single `ConfigError`.

use std::sync::LazyLock;

use peek_common::ConfigError;
use regex::Regex;

use crate::schema::PeekConfig;

static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[^\s/]+").expect("valid regex"));

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PeekConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(&mut errors, "window.width", config.window.width, 200, 10_000);
    validate_range(&mut errors, "window.height", config.window.height, 150, 10_000);
    validate_range(
        &mut errors,
        "settings_dialog.width",
        config.settings_dialog.width,
        200,
        4_000,
    );
    validate_range(
        &mut errors,
        "settings_dialog.height",
        config.settings_dialog.height,
        100,
        4_000,
    );

    let player = &config.player;
    validate_range_f64(&mut errors, "player.default_zoom", player.default_zoom, 0.25, 5.0);
    validate_range_f64(&mut errors, "player.bounds_slack", player.bounds_slack, 0.0, 100.0);
    if player.isolation_delay_ms > 60_000 {
        errors.push(format!(
            "player.isolation_delay_ms = {} is out of range [0, 60000]",
            player.isolation_delay_ms
        ));
    }
    validate_http_url(&mut errors, "player.default_url", &player.default_url);
    validate_http_url(&mut errors, "player.fallback_url", &player.fallback_url);

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]` (integer).
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float). NaN fails.
fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_http_url(errors: &mut Vec<String>, name: &str, value: &str) {
    if !HTTP_URL.is_match(value) {
        errors.push(format!("{name} = {value:?} must be an http(s) URL"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&PeekConfig::default()).is_ok());
    }

    #[test]
    fn catches_tiny_window() {
        let mut config = PeekConfig::default();
        config.window.width = 20;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.width"));
    }

    #[test]
    fn catches_zoom_out_of_range() {
        let mut config = PeekConfig::default();
        config.player.default_zoom = 0.0;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("player.default_zoom"));

        config.player.default_zoom = f64::NAN;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn catches_negative_slack() {
        let mut config = PeekConfig::default();
        config.player.bounds_slack = -1.0;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("player.bounds_slack"));
    }

    #[test]
    fn catches_long_isolation_delay() {
        let mut config = PeekConfig::default();
        config.player.isolation_delay_ms = 120_000;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("player.isolation_delay_ms"));
    }

    #[test]
    fn catches_non_http_urls() {
        let mut config = PeekConfig::default();
        config.player.default_url = "example.com".into();
        config.player.fallback_url = "file:///etc/passwd".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("player.default_url"));
        assert!(err.contains("player.fallback_url"));
    }

    #[test]
    fn accepts_uppercase_scheme() {
        let mut config = PeekConfig::default();
        config.player.default_url = "HTTPS://Example.com/Live".into();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn catches_unknown_log_level() {
        let mut config = PeekConfig::default();
        config.logging.level = "loud".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("logging.level"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = PeekConfig::default();
        config.window.height = 1;
        config.settings_dialog.width = 1;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.height"));
        assert!(err.contains("settings_dialog.width"));
        assert!(err.contains("; "));
    }
}
