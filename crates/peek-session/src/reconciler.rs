//! Bounds reconciliation for the player surface.
//!
//! Two sources want to position the player: the chrome page, which lays out
//! a frame and reports where the player should sit, and the player itself,
//! which can demand the whole window when its content goes fullscreen. The
//! reconciler owns the override state and is the only code that moves the
//! surface (auto-resize tracking aside).

use peek_common::{BoundsRequest, ContentSize, EmbeddedSurface, SurfaceError, WindowBounds};
use tracing::{debug, info};

/// Default tolerance, in pixels, for requests that overhang the window.
pub const DEFAULT_BOUNDS_SLACK: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenOverride {
    Normal,
    /// The player fills the window; `saved` is restored on exit.
    Active { saved: WindowBounds },
}

/// What a bounds request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsOutcome {
    /// The surface was moved.
    Applied(WindowBounds),
    /// Override is active; the bounds were kept for later.
    Saved(WindowBounds),
    /// Invalid for the current content size. Nothing changed.
    Rejected,
}

/// Validate a raw request against the content area and round it.
///
/// Non-finite components, non-positive sizes, negative origins and
/// anything extending past the content area by more than `slack` are
/// rejected, as is a request whose size rounds to zero.
pub fn validate_request(
    request: &BoundsRequest,
    content: ContentSize,
    slack: f64,
) -> Option<WindowBounds> {
    let BoundsRequest {
        x,
        y,
        width,
        height,
    } = *request;

    if ![x, y, width, height].iter().all(|v| v.is_finite()) {
        return None;
    }
    if width <= 0.0 || height <= 0.0 || x < 0.0 || y < 0.0 {
        return None;
    }
    if x + width > content.width as f64 + slack || y + height > content.height as f64 + slack {
        return None;
    }

    // Bounded by the content size above, so the casts cannot truncate.
    WindowBounds::new(
        x.round() as i32,
        y.round() as i32,
        width.round() as u32,
        height.round() as u32,
    )
}

#[derive(Debug)]
pub struct BoundsReconciler {
    mode: FullscreenOverride,
    slack: f64,
}

impl Default for BoundsReconciler {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDS_SLACK)
    }
}

impl BoundsReconciler {
    pub fn new(slack: f64) -> Self {
        Self {
            mode: FullscreenOverride::Normal,
            slack,
        }
    }

    pub fn mode(&self) -> FullscreenOverride {
        self.mode
    }

    pub fn is_override_active(&self) -> bool {
        matches!(self.mode, FullscreenOverride::Active { .. })
    }

    /// Player content went fullscreen: remember where it was and fill the
    /// window. A repeated enter only re-fills; the first saved bounds win.
    pub fn enter_fullscreen<S>(
        &mut self,
        surface: &mut S,
        content: ContentSize,
    ) -> Result<(), SurfaceError>
    where
        S: EmbeddedSurface + ?Sized,
    {
        let saved = match self.mode {
            FullscreenOverride::Active { saved } => saved,
            FullscreenOverride::Normal => surface.bounds(),
        };
        self.mode = FullscreenOverride::Active { saved };
        surface.set_auto_resize(false);

        match WindowBounds::filling(content) {
            Some(full) => {
                info!(saved = %saved, full = %full, "fullscreen override engaged");
                surface.set_bounds(full)
            }
            None => {
                debug!(content = %content, "window has no content area, fill deferred");
                Ok(())
            }
        }
    }

    /// Player content left fullscreen: put the surface back.
    pub fn exit_fullscreen<S>(&mut self, surface: &mut S) -> Result<(), SurfaceError>
    where
        S: EmbeddedSurface + ?Sized,
    {
        let FullscreenOverride::Active { saved } = self.mode else {
            debug!("fullscreen exit while not overridden, ignoring");
            return Ok(());
        };
        self.mode = FullscreenOverride::Normal;
        surface.set_auto_resize(true);
        info!(restored = %saved, "fullscreen override released");
        surface.set_bounds(saved)
    }

    /// The host window's content area changed size.
    ///
    /// In normal mode the surface tracks the window on its own; during an
    /// override it is stretched to the new size.
    pub fn window_resized<S>(
        &mut self,
        surface: &mut S,
        content: ContentSize,
    ) -> Result<(), SurfaceError>
    where
        S: EmbeddedSurface + ?Sized,
    {
        if !self.is_override_active() {
            return Ok(());
        }
        match WindowBounds::filling(content) {
            Some(full) => surface.set_bounds(full),
            None => Ok(()),
        }
    }

    /// Apply a layout request from the chrome page.
    pub fn request_bounds<S>(
        &mut self,
        surface: &mut S,
        request: &BoundsRequest,
        content: ContentSize,
    ) -> Result<BoundsOutcome, SurfaceError>
    where
        S: EmbeddedSurface + ?Sized,
    {
        let Some(bounds) = validate_request(request, content, self.slack) else {
            debug!(?request, content = %content, "bounds request rejected");
            return Ok(BoundsOutcome::Rejected);
        };

        match &mut self.mode {
            FullscreenOverride::Active { saved } => {
                *saved = bounds;
                Ok(BoundsOutcome::Saved(bounds))
            }
            FullscreenOverride::Normal => {
                surface.set_bounds(bounds)?;
                Ok(BoundsOutcome::Applied(bounds))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSurface;

    fn content() -> ContentSize {
        ContentSize::new(1000, 750)
    }

    fn bounds(x: i32, y: i32, w: u32, h: u32) -> WindowBounds {
        WindowBounds::new(x, y, w, h).unwrap()
    }

    #[test]
    fn validate_accepts_and_rounds() {
        let got = validate_request(
            &BoundsRequest::new(10.4, 20.6, 300.5, 199.4),
            content(),
            5.0,
        );
        assert_eq!(got, Some(bounds(10, 21, 301, 199)));
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let c = content();
        let cases = [
            BoundsRequest::new(0.0, 0.0, 1200.0, 750.0),
            BoundsRequest::new(-1.0, 0.0, 100.0, 100.0),
            BoundsRequest::new(0.0, -0.5, 100.0, 100.0),
            BoundsRequest::new(0.0, 0.0, 0.0, 100.0),
            BoundsRequest::new(0.0, 0.0, 100.0, -3.0),
            BoundsRequest::new(0.0, 700.0, 100.0, 60.0),
            BoundsRequest::new(f64::NAN, 0.0, 100.0, 100.0),
            BoundsRequest::new(0.0, 0.0, f64::INFINITY, 100.0),
            BoundsRequest::new(0.0, 0.0, 0.3, 100.0),
        ];
        for request in cases {
            assert_eq!(validate_request(&request, c, 5.0), None, "{request:?}");
        }
    }

    #[test]
    fn validate_allows_slack_overhang() {
        let c = content();
        assert!(validate_request(&BoundsRequest::new(0.0, 0.0, 1005.0, 750.0), c, 5.0).is_some());
        assert!(validate_request(&BoundsRequest::new(0.0, 0.0, 1005.1, 750.0), c, 5.0).is_none());
        assert!(validate_request(&BoundsRequest::new(0.0, 0.0, 1001.0, 750.0), c, 0.0).is_none());
    }

    #[test]
    fn request_in_normal_mode_moves_surface() {
        let mut surface = FakeSurface::with_bounds(bounds(0, 0, 100, 100));
        let mut r = BoundsReconciler::default();
        let outcome = r
            .request_bounds(&mut surface, &BoundsRequest::new(5.0, 40.0, 990.0, 700.0), content())
            .unwrap();
        assert_eq!(outcome, BoundsOutcome::Applied(bounds(5, 40, 990, 700)));
        assert_eq!(surface.bounds, bounds(5, 40, 990, 700));
    }

    #[test]
    fn rejected_request_leaves_surface_alone() {
        let mut surface = FakeSurface::with_bounds(bounds(10, 10, 300, 200));
        let mut r = BoundsReconciler::default();
        let outcome = r
            .request_bounds(&mut surface, &BoundsRequest::new(0.0, 0.0, 1200.0, 750.0), content())
            .unwrap();
        assert_eq!(outcome, BoundsOutcome::Rejected);
        assert_eq!(surface.bounds, bounds(10, 10, 300, 200));
        assert!(surface.bounds_history.is_empty());
    }

    #[test]
    fn enter_and_exit_restore_bounds() {
        let mut surface = FakeSurface::with_bounds(bounds(10, 10, 300, 200));
        let mut r = BoundsReconciler::default();

        r.enter_fullscreen(&mut surface, content()).unwrap();
        assert_eq!(surface.bounds, bounds(0, 0, 1000, 750));
        assert!(!surface.auto_resize);
        assert_eq!(
            r.mode(),
            FullscreenOverride::Active {
                saved: bounds(10, 10, 300, 200)
            }
        );

        r.exit_fullscreen(&mut surface).unwrap();
        assert_eq!(surface.bounds, bounds(10, 10, 300, 200));
        assert!(surface.auto_resize);
        assert_eq!(r.mode(), FullscreenOverride::Normal);
    }

    #[test]
    fn repeated_enter_keeps_first_saved_bounds() {
        let mut surface = FakeSurface::with_bounds(bounds(10, 10, 300, 200));
        let mut r = BoundsReconciler::default();
        r.enter_fullscreen(&mut surface, content()).unwrap();
        r.enter_fullscreen(&mut surface, ContentSize::new(1200, 800)).unwrap();
        assert_eq!(surface.bounds, bounds(0, 0, 1200, 800));

        r.exit_fullscreen(&mut surface).unwrap();
        assert_eq!(surface.bounds, bounds(10, 10, 300, 200));
    }

    #[test]
    fn exit_without_enter_is_noop() {
        let mut surface = FakeSurface::with_bounds(bounds(10, 10, 300, 200));
        let mut r = BoundsReconciler::default();
        r.exit_fullscreen(&mut surface).unwrap();
        assert!(surface.bounds_history.is_empty());
        assert!(surface.auto_resize);
    }

    #[test]
    fn requests_during_override_are_saved_not_applied() {
        let mut surface = FakeSurface::with_bounds(bounds(10, 10, 300, 200));
        let mut r = BoundsReconciler::default();
        r.enter_fullscreen(&mut surface, content()).unwrap();

        for (i, w) in [400.0, 500.0, 600.0].into_iter().enumerate() {
            let outcome = r
                .request_bounds(&mut surface, &BoundsRequest::new(i as f64, 0.0, w, 300.0), content())
                .unwrap();
            assert!(matches!(outcome, BoundsOutcome::Saved(_)));
            assert_eq!(surface.bounds, bounds(0, 0, 1000, 750));
        }
        // Invalid requests do not clobber the saved bounds.
        r.request_bounds(&mut surface, &BoundsRequest::new(0.0, 0.0, 5000.0, 1.0), content())
            .unwrap();

        r.exit_fullscreen(&mut surface).unwrap();
        assert_eq!(surface.bounds, bounds(2, 0, 600, 300));
    }

    #[test]
    fn resize_during_override_refills() {
        let mut surface = FakeSurface::with_bounds(bounds(10, 10, 300, 200));
        let mut r = BoundsReconciler::default();

        r.window_resized(&mut surface, ContentSize::new(800, 600)).unwrap();
        assert!(surface.bounds_history.is_empty());

        r.enter_fullscreen(&mut surface, content()).unwrap();
        r.window_resized(&mut surface, ContentSize::new(1280, 720)).unwrap();
        assert_eq!(surface.bounds, bounds(0, 0, 1280, 720));

        // Minimized: nothing to fill.
        r.window_resized(&mut surface, ContentSize::new(0, 0)).unwrap();
        assert_eq!(surface.bounds, bounds(0, 0, 1280, 720));
    }
}
