//! Webview event draining and wake-up scheduling.

use std::time::Instant;

use peek_common::{EmbeddedSurface, HostWindow, ViewKind};
use peek_session::Reply;
use peek_webview::{PageLoadState, WebViewEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::PeekApp;
use super::types::POLL_INTERVAL;

impl PeekApp {
    /// Drain webview events, run due timers and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_webview_events(event_loop);

        let now = Instant::now();
        let mut wake = now + POLL_INTERVAL;
        if let Some(session) = self.session.as_mut() {
            session.poll_isolation(now);
            if let Some(deadline) = session.next_deadline() {
                wake = wake.min(deadline);
            }
        }

        if self.should_exit {
            event_loop.exit();
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
        }
    }

    fn poll_webview_events(&mut self, event_loop: &ActiveEventLoop) {
        let events = match self.webviews.as_ref() {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::PageLoad {
                    view,
                    state: PageLoadState::Finished,
                    url,
                } => self.on_page_loaded(view, &url),
                WebViewEvent::PageLoad { view, url, .. } => {
                    tracing::debug!(%view, %url, "page load started");
                }
                WebViewEvent::IpcMessage { view, body } => {
                    self.handle_ipc_message(view, &body, event_loop);
                }
                WebViewEvent::Closed { view } => {
                    tracing::debug!(%view, "webview closed");
                }
            }
        }
    }

    fn on_page_loaded(&mut self, view: ViewKind, url: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match view {
            ViewKind::Player => {
                if let Some(player) = session.surface_mut().filter(|p| p.is_alive()) {
                    player.note_loaded(url);
                }
                peek_platform::crash_report::record_player_url(url);
                session.on_load_finished(url, Instant::now());
            }
            ViewKind::Chrome => {
                let on_top = session.window().is_always_on_top();
                let reply = Reply::new("always-on-top-status", serde_json::json!(on_top));
                self.send_reply(ViewKind::Chrome, &reply);
            }
            ViewKind::Settings => tracing::debug!(%url, "settings page loaded"),
        }
    }
}
