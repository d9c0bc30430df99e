//! `ApplicationHandler` implementation for the winit event loop.

use peek_common::{EmbeddedSurface, HostWindow, SettingsDialog, ViewKind};
use peek_webview::bounds::full_rect;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::PeekApp;
use super::settings_window::DialogContext;

impl ApplicationHandler for PeekApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.settings_window.id() == Some(window_id) {
            self.settings_window_event(event_loop, event);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                self.should_exit = true;
                event_loop.exit();
            }

            WindowEvent::Resized(_) => self.main_window_resized(),

            WindowEvent::Destroyed => {
                tracing::debug!("main window destroyed");
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl PeekApp {
    fn main_window_resized(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let content = session.window().content_size();

        if let Some(player) = session.surface_mut().filter(|p| p.is_alive()) {
            if let Err(e) = player.follow_parent(content) {
                tracing::warn!("player failed to follow window: {e}");
            }
        }
        session.on_window_resized(content);

        if let Some(chrome) = self.webviews.as_ref().and_then(|r| r.get(ViewKind::Chrome)) {
            if let Err(e) = chrome.set_bounds(full_rect(content)) {
                tracing::warn!("failed to resize chrome view: {e}");
            }
        }
    }

    fn settings_window_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                let mut dialog = DialogContext {
                    slot: &mut self.settings_window,
                    registry: self.webviews.as_mut(),
                    event_loop,
                    config: &self.config.settings_dialog,
                    parent: self.window.as_ref(),
                };
                dialog.close();
            }

            WindowEvent::Resized(_) => {
                let Some(content) = self.settings_window.host().map(|h| h.content_size()) else {
                    return;
                };
                let settings = self.webviews.as_ref().and_then(|r| r.get(ViewKind::Settings));
                if let Some(view) = settings {
                    if let Err(e) = view.set_bounds(full_rect(content)) {
                        tracing::warn!("failed to resize settings view: {e}");
                    }
                }
            }

            _ => {}
        }
    }
}
