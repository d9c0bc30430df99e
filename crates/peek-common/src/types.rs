use serde::{Deserialize, Serialize};
use std::fmt;

/// Default destination when nothing has been persisted yet.
pub const DEFAULT_URL: &str = "https://www.baidu.com";
pub const DEFAULT_ZOOM: f64 = 1.0;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Size of a host window's content area, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentSize {
    pub width: u32,
    pub height: u32,
}

impl ContentSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A minimized window reports a zero-area content size.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for ContentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Integer bounds of a view inside its host window's content area.
///
/// Width and height are always non-zero; use [`WindowBounds::new`] to build
/// one from untrusted numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowBounds {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Bounds covering the whole content area, anchored at the origin.
    pub fn filling(size: ContentSize) -> Option<Self> {
        Self::new(0, 0, size.width, size.height)
    }

    /// Proportionally rescale these bounds from one parent size to another.
    ///
    /// Horizontal position and width follow the parent's width, vertical
    /// position and height follow its height. Returns `self` unchanged if
    /// either size is empty.
    pub fn scaled(&self, from: ContentSize, to: ContentSize) -> Self {
        if from.is_empty() || to.is_empty() {
            return *self;
        }
        let sx = to.width as f64 / from.width as f64;
        let sy = to.height as f64 / from.height as f64;
        Self {
            x: (self.x as f64 * sx).round() as i32,
            y: (self.y as f64 * sy).round() as i32,
            width: ((self.width as f64 * sx).round() as u32).max(1),
            height: ((self.height as f64 * sy).round() as u32).max(1),
        }
    }
}

impl fmt::Display for WindowBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}

/// Raw bounds as computed by a UI surface. May be fractional, negative or
/// stale; it only becomes [`WindowBounds`] after validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsRequest {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundsRequest {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Persisted outer geometry of the main window.
///
/// Position is optional so a first launch lets the OS place the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPlacement {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowPlacement {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: 1000,
            height: 750,
        }
    }
}

// =============================================================================
// SETTINGS
// =============================================================================

/// The player's navigation target and zoom factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub url: String,
    pub zoom: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// A settings record as submitted by the settings dialog. Every field is
/// optional because the payload comes from an untrusted surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSubmission {
    pub url: Option<String>,
    pub zoom: Option<f64>,
}

impl SettingsSubmission {
    /// Zoom to apply: the submitted factor if usable, otherwise 1.0.
    pub fn effective_zoom(&self) -> f64 {
        match self.zoom {
            Some(z) if z.is_finite() && z > 0.0 => z,
            _ => DEFAULT_ZOOM,
        }
    }
}

// =============================================================================
// VIEWS
// =============================================================================

/// The web views the host manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// The embedded, untrusted player surface.
    Player,
    /// Main window chrome (title bar, player frame).
    Chrome,
    /// The settings dialog.
    Settings,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Player => "player",
            Self::Chrome => "chrome",
            Self::Settings => "settings",
        };
        f.write_str(name)
    }
}
