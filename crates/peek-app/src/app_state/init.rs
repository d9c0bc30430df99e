//! Main window creation, webview setup and session start.

use std::sync::Arc;

use peek_common::{ContentSize, HostWindow, ViewKind, WindowBounds, WindowPlacement};
use peek_config::schema::WindowDecorations;
use peek_config::store::{self, WINDOW_BOUNDS_KEY};
use peek_config::MemoryStore;
use peek_session::{Session, SessionOptions};
use peek_webview::bounds::{full_rect, to_wry_rect};
use peek_webview::scripts::ISOLATION_SCRIPT;
use peek_webview::{ContentProvider, PlayerSurface, WebViewConfig, WebViewManager, WebViewRegistry};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::icon;

use super::core::PeekApp;
use super::host_window::WinitHost;
use super::types::CHROME_BAR_HEIGHT;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl PeekApp {
    /// Create the main window, its webviews and the session.
    /// Returns `false` if the window could not be created and the event
    /// loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let store = self
            .store
            .take()
            .unwrap_or_else(|| Box::new(MemoryStore::new()));

        let fallback = WindowPlacement {
            x: None,
            y: None,
            width: self.config.window.width,
            height: self.config.window.height,
        };
        let placement = store::get_or(store.as_ref(), WINDOW_BOUNDS_KEY, fallback);
        tracing::debug!(?placement, "restoring window placement");

        let window = match event_loop.create_window(self.window_attributes(placement)) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                peek_platform::show_fatal_error(
                    "QuickPeek",
                    &format!("The main window could not be created.\n\n{e}"),
                );
                return false;
            }
        };

        let host = WinitHost::new(window.clone(), self.config.window.always_on_top);
        let content = host.content_size();

        self.initialize_webviews(&window, content);
        let surface = self.create_player(&window, content);

        let options = SessionOptions::from_config(&self.config.player, ISOLATION_SCRIPT);
        let mut session = Session::new(surface, host, store, options);
        session.start(self.url_override.as_deref());

        self.session = Some(session);
        self.window = Some(window);
        tracing::info!("Window created and session started");
        true
    }

    fn window_attributes(&self, placement: WindowPlacement) -> WindowAttributes {
        let cfg = &self.config.window;
        let mut attrs = WindowAttributes::default()
            .with_title(cfg.title.clone())
            .with_decorations(cfg.decorations == WindowDecorations::Full)
            .with_inner_size(LogicalSize::new(placement.width, placement.height));

        if let (Some(x), Some(y)) = (placement.x, placement.y) {
            attrs = attrs.with_position(LogicalPosition::new(x, y));
        }
        if let Some(path) = cfg.resolved_icon() {
            attrs = attrs.with_window_icon(icon::load_icon(&path));
        }
        attrs
    }

    /// Set up the registry with the `peek://` content provider and create
    /// the chrome view. The player is created separately.
    fn initialize_webviews(&mut self, window: &Arc<Window>, size: ContentSize) {
        let mut manager = WebViewManager::new();

        let mut provider = ContentProvider::builtin();
        match peek_platform::ui_override_dir() {
            Ok(dir) if dir.is_dir() => {
                tracing::info!(dir = %dir.display(), "serving UI overrides");
                provider = provider.with_base_dir(dir);
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("no UI override directory: {e}"),
        }
        manager.set_content_provider(provider);

        let mut registry = WebViewRegistry::new(manager);
        if let Err(e) = registry.create(
            ViewKind::Chrome,
            window.as_ref(),
            full_rect(size),
            WebViewConfig::ui_page(ViewKind::Chrome),
        ) {
            tracing::error!("Failed to create chrome view: {e}");
        }
        self.webviews = Some(registry);
    }

    /// The player view, or `None` if it could not be created. The session
    /// then runs degraded and reports every operation that needs it.
    fn create_player(&self, window: &Arc<Window>, content: ContentSize) -> Option<PlayerSurface> {
        let registry = self.webviews.as_ref()?;
        let bounds = initial_player_bounds(content);
        let config = WebViewConfig::player(
            self.config.player.user_agent.clone(),
            self.config.player.devtools,
        );

        let created =
            registry.create_detached(ViewKind::Player, window.as_ref(), to_wry_rect(bounds), config);
        match created {
            Ok(handle) => Some(PlayerSurface::new(handle, bounds, content)),
            Err(e) => {
                peek_platform::show_fatal_error(
                    "QuickPeek",
                    &format!(
                        "The player could not be created. QuickPeek keeps running without it.\n\n{e}"
                    ),
                );
                None
            }
        }
    }
}

/// Where the player sits before the chrome reports its frame: everything
/// below the title bar, or the whole area if the window is too short.
pub(super) fn initial_player_bounds(content: ContentSize) -> WindowBounds {
    let below_bar = content.height.saturating_sub(CHROME_BAR_HEIGHT);
    WindowBounds::new(0, CHROME_BAR_HEIGHT as i32, content.width, below_bar)
        .or_else(|| WindowBounds::filling(content))
        .unwrap_or(WindowBounds {
            x: 0,
            y: 0,
            width: 1,
            height: 1,
        })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_below_the_bar() {
        let bounds = initial_player_bounds(ContentSize::new(1000, 750));
        assert_eq!(bounds, WindowBounds::new(0, 28, 1000, 722).unwrap());
    }

    #[test]
    fn short_window_gets_full_area() {
        let bounds = initial_player_bounds(ContentSize::new(300, 20));
        assert_eq!(bounds, WindowBounds::new(0, 0, 300, 20).unwrap());
    }

    #[test]
    fn empty_window_still_gets_usable_bounds() {
        let bounds = initial_player_bounds(ContentSize::new(0, 0));
        assert_eq!(bounds.width, 1);
        assert_eq!(bounds.height, 1);
    }
}
