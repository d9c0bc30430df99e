//! Embedded player behaviour.

use std::time::Duration;

use peek_common::types::{DEFAULT_URL, DEFAULT_ZOOM};
use peek_common::Settings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Destination used until the user saves settings.
    pub default_url: String,
    pub default_zoom: f64,
    /// Where to go when navigating to the configured URL fails.
    pub fallback_url: String,
    /// Tolerance in pixels when checking view bounds against the window.
    pub bounds_slack: f64,
    /// Run the content isolation payload after each page load.
    pub isolation_enabled: bool,
    /// Settling delay between load completion and the isolation payload.
    pub isolation_delay_ms: u64,
    pub user_agent: Option<String>,
    pub devtools: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_url: DEFAULT_URL.into(),
            default_zoom: DEFAULT_ZOOM,
            fallback_url: DEFAULT_URL.into(),
            bounds_slack: 5.0,
            isolation_enabled: true,
            isolation_delay_ms: 2500,
            user_agent: None,
            devtools: cfg!(debug_assertions),
        }
    }
}

impl PlayerConfig {
    /// Settings to use when none have been persisted.
    pub fn default_settings(&self) -> Settings {
        Settings {
            url: self.default_url.clone(),
            zoom: self.default_zoom,
        }
    }

    pub fn isolation_delay(&self) -> Duration {
        Duration::from_millis(self.isolation_delay_ms)
    }
}
