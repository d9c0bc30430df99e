//! `PeekApp` struct definition and constructor.

use std::sync::Arc;

use peek_config::{PeekConfig, StateStore};
use peek_session::Session;
use peek_webview::{PlayerSurface, WebViewRegistry};
use winit::window::Window;

use super::host_window::WinitHost;
use super::settings_window::SettingsWindow;

/// The session as the app drives it.
pub(super) type PeekSession = Session<PlayerSurface, WinitHost>;

/// Top-level application state.
pub struct PeekApp {
    pub(super) config: PeekConfig,
    /// `--url` from the command line; loaded once, never persisted.
    pub(super) url_override: Option<String>,
    /// Held until the session takes ownership in `initialize_window`.
    pub(super) store: Option<Box<dyn StateStore>>,
    /// Main window, shared with the session's host adapter.
    pub(super) window: Option<Arc<Window>>,
    pub(super) webviews: Option<WebViewRegistry>,
    pub(super) session: Option<PeekSession>,
    pub(super) settings_window: SettingsWindow,
    pub(super) should_exit: bool,
}

impl PeekApp {
    pub fn new(
        config: PeekConfig,
        store: Box<dyn StateStore>,
        url_override: Option<String>,
    ) -> Self {
        Self {
            config,
            url_override,
            store: Some(store),
            window: None,
            webviews: None,
            session: None,
            settings_window: SettingsWindow::default(),
            should_exit: false,
        }
    }
}
