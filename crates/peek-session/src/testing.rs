//! In-memory collaborators for session tests.

use peek_common::{
    ContentSize, EmbeddedSurface, HostWindow, SettingsDialog, SurfaceError, WindowBounds,
    WindowPlacement,
};

#[derive(Debug)]
pub struct FakeSurface {
    pub alive: bool,
    pub url: String,
    pub zoom: f64,
    pub bounds: WindowBounds,
    pub auto_resize: bool,
    pub navigations: Vec<String>,
    pub zooms: Vec<f64>,
    pub bounds_history: Vec<WindowBounds>,
    pub scripts: Vec<String>,
    /// URLs whose navigation fails.
    pub failing_urls: Vec<String>,
    pub fail_scripts: bool,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::with_bounds(WindowBounds::new(0, 0, 1000, 750).unwrap())
    }

    pub fn with_bounds(bounds: WindowBounds) -> Self {
        Self {
            alive: true,
            url: "about:blank".into(),
            zoom: 1.0,
            bounds,
            auto_resize: true,
            navigations: Vec::new(),
            zooms: Vec::new(),
            bounds_history: Vec::new(),
            scripts: Vec::new(),
            failing_urls: Vec::new(),
            fail_scripts: false,
        }
    }

    pub fn at_url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }
}

impl EmbeddedSurface for FakeSurface {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn navigate(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.navigations.push(url.to_string());
        if self.failing_urls.iter().any(|u| u == url) {
            return Err(SurfaceError::Load {
                url: url.into(),
                reason: "unreachable".into(),
            });
        }
        self.url = url.to_string();
        Ok(())
    }

    fn set_zoom(&mut self, factor: f64) -> Result<(), SurfaceError> {
        self.zoom = factor;
        self.zooms.push(factor);
        Ok(())
    }

    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: WindowBounds) -> Result<(), SurfaceError> {
        self.bounds = bounds;
        self.bounds_history.push(bounds);
        Ok(())
    }

    fn set_auto_resize(&mut self, enabled: bool) {
        self.auto_resize = enabled;
    }

    fn run_script(&mut self, script: &str) -> Result<(), SurfaceError> {
        self.scripts.push(script.to_string());
        if self.fail_scripts {
            return Err(SurfaceError::Script("page rejected script".into()));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeWindow {
    pub alive: bool,
    pub content: ContentSize,
    pub placement: WindowPlacement,
    pub on_top: bool,
    pub drags: usize,
}

impl FakeWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            alive: true,
            content: ContentSize::new(width, height),
            placement: WindowPlacement {
                x: Some(40),
                y: Some(60),
                width,
                height,
            },
            on_top: false,
            drags: 0,
        }
    }
}

impl HostWindow for FakeWindow {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn content_size(&self) -> ContentSize {
        self.content
    }

    fn outer_placement(&self) -> WindowPlacement {
        self.placement
    }

    fn is_always_on_top(&self) -> bool {
        self.on_top
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        self.on_top = on_top;
    }

    fn begin_drag(&mut self) -> Result<(), SurfaceError> {
        self.drags += 1;
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeDialog {
    pub window: Option<FakeWindow>,
    pub opens: usize,
    pub focuses: usize,
}

impl FakeDialog {
    pub fn closed() -> Self {
        Self {
            window: None,
            opens: 0,
            focuses: 0,
        }
    }

    pub fn open() -> Self {
        Self {
            window: Some(FakeWindow::new(450, 250)),
            opens: 1,
            focuses: 0,
        }
    }
}

impl SettingsDialog for FakeDialog {
    fn is_open(&self) -> bool {
        self.window.is_some()
    }

    fn open_or_focus(&mut self) -> Result<(), SurfaceError> {
        if self.window.is_some() {
            self.focuses += 1;
        } else {
            self.window = Some(FakeWindow::new(450, 250));
            self.opens += 1;
        }
        Ok(())
    }

    fn close(&mut self) {
        self.window = None;
    }

    fn host_window(&mut self) -> Option<&mut dyn HostWindow> {
        self.window.as_mut().map(|w| w as &mut dyn HostWindow)
    }
}
