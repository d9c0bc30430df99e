use peek_common::ViewKind;
use wry::WebView;

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, evaluate JS, resize, etc.).
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// Which view this WebView renders.
    pub(super) view: ViewKind,
    /// Last URL requested or reported loaded (best-effort tracking).
    pub(super) current_url: String,
}

impl WebViewHandle {
    pub fn view(&self) -> ViewKind {
        self.view
    }

    /// The URL the WebView reports, or the last one we asked it to load.
    pub fn current_url(&self) -> String {
        self.webview
            .url()
            .unwrap_or_else(|_| self.current_url.clone())
    }

    /// Record the URL reported by a page load event.
    pub fn set_current_url(&mut self, url: impl Into<String>) {
        self.current_url = url.into();
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.webview.load_url(url)?;
        self.current_url = url.to_string();
        Ok(())
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to JavaScript, optionally answering the
    /// request with the given id.
    pub fn send_ipc(
        &self,
        kind: &str,
        payload: &serde_json::Value,
        id: Option<&serde_json::Value>,
    ) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload, id);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Set zoom level.
    pub fn zoom(&self, scale: f64) -> Result<(), wry::Error> {
        self.webview.zoom(scale)
    }
}
