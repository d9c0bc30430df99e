use std::collections::HashMap;

use peek_common::ViewKind;
use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Maps view kinds to WebView handles on top of a `WebViewManager`.
///
/// The chrome and settings views live here. The player is created through
/// [`WebViewRegistry::create_detached`] and owned by its surface adapter.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<ViewKind, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a WebView for a view and register it, replacing any
    /// previous one of the same kind.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        view: ViewKind,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(view, window, bounds, config)?;
        if self.handles.insert(view, handle).is_some() {
            debug!(%view, "replaced existing WebView");
        }
        Ok(())
    }

    /// Create a WebView whose handle the caller keeps. Its events still
    /// arrive through [`WebViewRegistry::drain_events`].
    pub fn create_detached<W: raw_window_handle::HasWindowHandle>(
        &self,
        view: ViewKind,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        self.manager.create(view, window, bounds, config)
    }

    pub fn get(&self, view: ViewKind) -> Option<&WebViewHandle> {
        self.handles.get(&view)
    }

    /// Destroy a WebView by kind.
    pub fn destroy(&mut self, view: ViewKind) -> bool {
        if self.handles.remove(&view).is_some() {
            debug!(%view, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed { view });
            true
        } else {
            false
        }
    }

    /// Drain all pending events from all WebViews.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all registered WebViews. Used during shutdown.
    pub fn destroy_all(&mut self) {
        let views: Vec<ViewKind> = self.handles.keys().copied().collect();
        for view in views {
            self.destroy(view);
        }
    }
}
