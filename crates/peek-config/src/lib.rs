//! QuickPeek configuration and persisted state.
//!
//! Two separate concerns live here:
//! - the user-editable TOML config (`config.toml`), loaded once at startup
//!   with serde defaults for every missing field;
//! - the small JSON state store (`state.json`) holding the player settings
//!   and the last window placement across runs.
//!
//! ```rust,no_run
//! use peek_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod validation;

pub use schema::PeekConfig;
pub use store::{open_state_store, FileStore, MemoryStore, StateStore};

use peek_common::ConfigError;
use std::path::Path;

/// Load the config from `path`, or from the platform default location.
///
/// The default location is created with a documented template on first
/// run. An explicit `path` must exist.
pub fn load_config(path: Option<&Path>) -> Result<PeekConfig, ConfigError> {
    let config = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::FileNotFound(p.to_path_buf()));
            }
            toml_loader::load_from_path(p)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PeekConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
