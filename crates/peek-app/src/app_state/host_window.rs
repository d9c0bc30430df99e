//! `HostWindow` over a winit window.

use std::sync::Arc;

use peek_common::{ContentSize, HostWindow, SurfaceError, WindowPlacement};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::window::{Window, WindowId, WindowLevel};

/// A top-level winit window as the session sees it.
///
/// Sizes are reported in logical pixels, the unit wry bounds use.
pub struct WinitHost {
    window: Arc<Window>,
    on_top: bool,
    closed: bool,
}

impl WinitHost {
    pub fn new(window: Arc<Window>, on_top: bool) -> Self {
        if on_top {
            window.set_window_level(WindowLevel::AlwaysOnTop);
        }
        Self {
            window,
            on_top,
            closed: false,
        }
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// The OS window is going away; later calls become no-ops.
    pub fn mark_closed(&mut self) {
        self.closed = true;
    }

    pub fn focus(&self) {
        self.window.focus_window();
    }
}

impl HostWindow for WinitHost {
    fn is_alive(&self) -> bool {
        !self.closed
    }

    fn content_size(&self) -> ContentSize {
        let size: LogicalSize<u32> = self
            .window
            .inner_size()
            .to_logical(self.window.scale_factor());
        ContentSize::new(size.width, size.height)
    }

    fn outer_placement(&self) -> WindowPlacement {
        let scale = self.window.scale_factor();
        let position = self
            .window
            .outer_position()
            .ok()
            .map(|p| p.to_logical::<i32>(scale));
        let size = self.content_size();
        WindowPlacement {
            x: position.map(|p: LogicalPosition<i32>| p.x),
            y: position.map(|p| p.y),
            width: size.width,
            height: size.height,
        }
    }

    fn is_always_on_top(&self) -> bool {
        self.on_top
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        let level = if on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        self.window.set_window_level(level);
        self.on_top = on_top;
    }

    fn begin_drag(&mut self) -> Result<(), SurfaceError> {
        self.window
            .drag_window()
            .map_err(|e| SurfaceError::Window(e.to_string()))
    }
}
