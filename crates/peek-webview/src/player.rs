//! The player view as an [`EmbeddedSurface`].

use peek_common::{ContentSize, EmbeddedSurface, SurfaceError, WindowBounds};
use tracing::debug;

use crate::bounds::to_wry_rect;
use crate::manager::WebViewHandle;

/// Where auto-resize tracking moves `bounds` when the parent goes from
/// `from` to `to`. `None` means leave the view where it is.
/// Position and size scale with the parent on both axes.
pub fn auto_resized(
    bounds: WindowBounds,
    from: ContentSize,
    to: ContentSize,
    enabled: bool,
) -> Option<WindowBounds> {
    if !enabled || from == to || from.is_empty() || to.is_empty() {
        return None;
    }
    Some(bounds.scaled(from, to))
}

/// Adapter over the player WebView.
///
/// wry child views never resize themselves, so proportional tracking of
/// the parent window is emulated in [`PlayerSurface::follow_parent`].
pub struct PlayerSurface {
    handle: WebViewHandle,
    bounds: WindowBounds,
    parent: ContentSize,
    auto_resize: bool,
    alive: bool,
}

impl PlayerSurface {
    pub fn new(handle: WebViewHandle, bounds: WindowBounds, parent: ContentSize) -> Self {
        Self {
            handle,
            bounds,
            parent,
            auto_resize: true,
            alive: true,
        }
    }

    /// The parent window's content area changed size.
    ///
    /// A minimized (empty) parent is ignored so the last real size is kept
    /// as the reference for the restore.
    pub fn follow_parent(&mut self, size: ContentSize) -> Result<(), SurfaceError> {
        if size.is_empty() {
            return Ok(());
        }
        let from = self.parent;
        self.parent = size;
        match auto_resized(self.bounds, from, size, self.auto_resize && self.alive) {
            Some(next) => {
                debug!(from = %self.bounds, to = %next, "player follows parent");
                self.set_bounds(next)
            }
            None => Ok(()),
        }
    }

    /// Record the URL reported by a finished load.
    pub fn note_loaded(&mut self, url: &str) {
        self.handle.set_current_url(url);
    }

    /// The WebView is gone; every later call is refused.
    pub fn mark_destroyed(&mut self) {
        self.alive = false;
    }

    fn live(&self) -> Result<&WebViewHandle, SurfaceError> {
        if self.alive {
            Ok(&self.handle)
        } else {
            Err(SurfaceError::Destroyed)
        }
    }
}

impl EmbeddedSurface for PlayerSurface {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn navigate(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.live()?;
        self.handle.load_url(url).map_err(|e| SurfaceError::Load {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    fn set_zoom(&mut self, factor: f64) -> Result<(), SurfaceError> {
        self.live()?
            .zoom(factor)
            .map_err(|e| SurfaceError::Zoom(e.to_string()))
    }

    fn current_url(&self) -> String {
        self.handle.current_url()
    }

    fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: WindowBounds) -> Result<(), SurfaceError> {
        self.live()?
            .set_bounds(to_wry_rect(bounds))
            .map_err(|e| SurfaceError::Bounds(e.to_string()))?;
        self.bounds = bounds;
        Ok(())
    }

    fn set_auto_resize(&mut self, enabled: bool) {
        self.auto_resize = enabled;
    }

    fn run_script(&mut self, script: &str) -> Result<(), SurfaceError> {
        self.live()?
            .evaluate_script(script)
            .map_err(|e| SurfaceError::Script(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(x: i32, y: i32, w: u32, h: u32) -> WindowBounds {
        WindowBounds::new(x, y, w, h).unwrap()
    }

    #[test]
    fn scales_with_parent() {
        let next = auto_resized(
            bounds(0, 28, 1000, 722),
            ContentSize::new(1000, 750),
            ContentSize::new(2000, 1500),
            true,
        );
        assert_eq!(next, Some(bounds(0, 56, 2000, 1444)));
    }

    #[test]
    fn disabled_or_unchanged_does_nothing() {
        let b = bounds(10, 10, 300, 200);
        let c = ContentSize::new(1000, 750);
        assert_eq!(auto_resized(b, c, ContentSize::new(500, 400), false), None);
        assert_eq!(auto_resized(b, c, c, true), None);
    }

    #[test]
    fn empty_sizes_do_nothing() {
        let b = bounds(10, 10, 300, 200);
        assert_eq!(
            auto_resized(b, ContentSize::new(0, 0), ContentSize::new(800, 600), true),
            None
        );
        assert_eq!(
            auto_resized(b, ContentSize::new(800, 600), ContentSize::new(800, 0), true),
            None
        );
    }
}
