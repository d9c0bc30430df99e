//! The settings dialog: a second frameless winit window hosting the
//! settings page.

use std::sync::Arc;

use peek_common::{HostWindow, SettingsDialog, SurfaceError, ViewKind};
use peek_config::schema::DialogConfig;
use peek_webview::bounds::full_rect;
use peek_webview::{WebViewConfig, WebViewRegistry};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use super::host_window::WinitHost;

/// Slot holding the dialog window while it is open.
#[derive(Default)]
pub struct SettingsWindow {
    host: Option<WinitHost>,
}

impl SettingsWindow {
    pub fn id(&self) -> Option<WindowId> {
        self.host.as_ref().map(WinitHost::id)
    }

    pub fn host(&self) -> Option<&WinitHost> {
        self.host.as_ref()
    }

    /// Drop the window without touching its webview.
    pub fn clear(&mut self) {
        if let Some(mut host) = self.host.take() {
            host.mark_closed();
        }
    }
}

/// Everything needed to open, focus or close the dialog from inside an
/// event-loop callback.
pub struct DialogContext<'a> {
    pub slot: &'a mut SettingsWindow,
    pub registry: Option<&'a mut WebViewRegistry>,
    pub event_loop: &'a ActiveEventLoop,
    pub config: &'a DialogConfig,
    /// Main window, for centering.
    pub parent: Option<&'a Arc<Window>>,
}

impl DialogContext<'_> {
    fn attributes(&self) -> WindowAttributes {
        let mut attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_decorations(false)
            .with_resizable(false)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        if let Some(parent) = self.parent {
            let scale = parent.scale_factor();
            if let Ok(origin) = parent.outer_position() {
                let origin: LogicalPosition<f64> = origin.to_logical(scale);
                let size: LogicalSize<f64> = parent.outer_size().to_logical(scale);
                let x = origin.x + (size.width - self.config.width as f64) / 2.0;
                let y = origin.y + (size.height - self.config.height as f64) / 2.0;
                attrs = attrs.with_position(LogicalPosition::new(x.max(0.0), y.max(0.0)));
            }
        }
        attrs
    }
}

impl SettingsDialog for DialogContext<'_> {
    fn is_open(&self) -> bool {
        self.slot.host.is_some()
    }

    fn open_or_focus(&mut self) -> Result<(), SurfaceError> {
        if let Some(host) = &self.slot.host {
            host.focus();
            let view = self
                .registry
                .as_deref()
                .and_then(|r| r.get(ViewKind::Settings));
            if let Some(view) = view {
                if let Err(e) = view.focus() {
                    tracing::debug!("settings view focus failed: {e}");
                }
            }
            return Ok(());
        }

        let attrs = self.attributes();
        let registry = self
            .registry
            .as_deref_mut()
            .ok_or_else(|| SurfaceError::Create("webview registry not initialized".into()))?;

        let window = self
            .event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| SurfaceError::Create(format!("settings window: {e}")))?;

        let host = WinitHost::new(window, false);
        registry
            .create(
                ViewKind::Settings,
                host.window().as_ref(),
                full_rect(host.content_size()),
                WebViewConfig::ui_page(ViewKind::Settings),
            )
            .map_err(|e| SurfaceError::Create(format!("settings view: {e}")))?;

        tracing::info!("settings window opened");
        self.slot.host = Some(host);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut host) = self.slot.host.take() {
            host.mark_closed();
            if let Some(registry) = self.registry.as_deref_mut() {
                registry.destroy(ViewKind::Settings);
            }
            tracing::info!("settings window closed");
        }
    }

    fn host_window(&mut self) -> Option<&mut dyn HostWindow> {
        self.slot
            .host
            .as_mut()
            .map(|h| h as &mut dyn HostWindow)
    }
}
