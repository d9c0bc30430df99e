//! Window configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Window decoration style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowDecorations {
    Full,
    /// Frameless: the chrome page draws its own title bar.
    #[default]
    None,
}

/// Main window appearance.
///
/// `width`/`height` are only used when no window placement has been
/// persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub decorations: WindowDecorations,
    pub always_on_top: bool,
    /// Optional window icon (PNG). Ignored if the file does not exist.
    pub icon: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "QuickPeek".into(),
            width: 1000,
            height: 750,
            decorations: WindowDecorations::None,
            always_on_top: false,
            icon: None,
        }
    }
}

impl WindowConfig {
    /// The icon path, only if it points at an existing file.
    pub fn resolved_icon(&self) -> Option<PathBuf> {
        self.icon.as_ref().filter(|p| p.is_file()).cloned()
    }
}

/// Settings dialog window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: "Settings".into(),
            width: 450,
            height: 250,
        }
    }
}
