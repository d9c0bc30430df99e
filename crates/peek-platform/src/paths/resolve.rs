use std::path::PathBuf;

use peek_common::PlatformError;

pub(super) const APP_NAME: &str = "quickpeek";

/// Returns the platform-specific configuration directory for QuickPeek.
///
/// - macOS: `~/Library/Application Support/quickpeek`
/// - Linux: `$XDG_CONFIG_HOME/quickpeek` (defaults to `~/.config/quickpeek`)
/// - Windows: `%APPDATA%\quickpeek`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for QuickPeek.
///
/// - macOS: `~/Library/Application Support/quickpeek`
/// - Linux: `$XDG_DATA_HOME/quickpeek` (defaults to `~/.local/share/quickpeek`)
/// - Windows: `%APPDATA%\quickpeek`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Persisted window placement and player settings.
pub fn state_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("state.json"))
}

/// Files here shadow the built-in chrome and settings pages.
pub fn ui_override_dir() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("ui"))
}

pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
