//! Collaborator interfaces the session drives.
//!
//! The concrete implementations live in `peek-webview` (wry) and
//! `peek-app` (winit); tests substitute in-memory fakes.

use crate::errors::SurfaceError;
use crate::types::{ContentSize, WindowBounds, WindowPlacement};

/// The embedded web surface hosting the player page.
pub trait EmbeddedSurface {
    /// `false` once the surface has been torn down by the host.
    fn is_alive(&self) -> bool;

    /// Begin navigating to `url`. Completion is reported separately.
    fn navigate(&mut self, url: &str) -> Result<(), SurfaceError>;

    fn set_zoom(&mut self, factor: f64) -> Result<(), SurfaceError>;

    /// The URL the surface currently shows (best effort).
    fn current_url(&self) -> String;

    fn bounds(&self) -> WindowBounds;

    fn set_bounds(&mut self, bounds: WindowBounds) -> Result<(), SurfaceError>;

    /// Toggle proportional tracking of the parent window's size.
    fn set_auto_resize(&mut self, enabled: bool);

    /// Evaluate a script inside the page. Fire-and-forget.
    fn run_script(&mut self, script: &str) -> Result<(), SurfaceError>;
}

/// A native top-level window.
pub trait HostWindow {
    fn is_alive(&self) -> bool;

    fn content_size(&self) -> ContentSize;

    /// Outer position and size, as persisted on close.
    fn outer_placement(&self) -> WindowPlacement;

    fn is_always_on_top(&self) -> bool;

    fn set_always_on_top(&mut self, on_top: bool);

    /// Start an OS-driven move of the window (frameless windows have no
    /// title bar to grab).
    fn begin_drag(&mut self) -> Result<(), SurfaceError>;
}

/// The singleton settings dialog.
pub trait SettingsDialog {
    fn is_open(&self) -> bool;

    /// Open the dialog, or focus it if it is already open.
    fn open_or_focus(&mut self) -> Result<(), SurfaceError>;

    /// Close the dialog if it is open.
    fn close(&mut self);

    /// The dialog's window, while it is open.
    fn host_window(&mut self) -> Option<&mut dyn HostWindow>;
}
