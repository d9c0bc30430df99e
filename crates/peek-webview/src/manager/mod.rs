//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances for the three views
//! (chrome, settings, player) and collects their events; the registry
//! tracks the UI views by kind.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Creates WebViews and owns the shared event sink.
pub struct WebViewManager {
    /// Event sink: handlers push here, the main event loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Optional content provider for the `peek://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *events)
    }

    /// Queue an event as if a handler had produced it.
    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peek_common::ViewKind;

    #[test]
    fn drain_takes_everything_once() {
        let manager = WebViewManager::new();
        manager.push_event(WebViewEvent::Closed {
            view: ViewKind::Settings,
        });
        manager.push_event(WebViewEvent::IpcMessage {
            view: ViewKind::Chrome,
            body: "{}".into(),
        });

        let events = manager.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].view(), ViewKind::Settings);
        assert!(manager.drain_events().is_empty());
    }
}
