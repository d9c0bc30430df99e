//! WebView event types.

use peek_common::ViewKind;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance.
///
/// wry invokes its callbacks re-entrantly from inside the platform event
/// loop, so handlers only record these; the app drains them afterwards.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        view: ViewKind,
        state: PageLoadState,
        url: String,
    },
    /// An IPC message was received from JavaScript.
    IpcMessage { view: ViewKind, body: String },
    /// WebView was closed / destroyed.
    Closed { view: ViewKind },
}

impl WebViewEvent {
    pub fn view(&self) -> ViewKind {
        match self {
            Self::PageLoad { view, .. } | Self::IpcMessage { view, .. } | Self::Closed { view } => {
                *view
            }
        }
    }
}
