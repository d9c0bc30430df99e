use std::borrow::Cow;
use std::sync::Arc;

use peek_common::ViewKind;
use tracing::{debug, warn};
use wry::http::{Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider, PROTOCOL};

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view: ViewKind,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_autoplay(config.autoplay)
            .with_focused(view != ViewKind::Player);

        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // JS -> Rust
        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view);

        if config.restrict_navigation {
            builder = Self::attach_navigation_handler(builder, view);
        }

        builder = self.attach_custom_protocol(builder);

        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        let webview = builder.build_as_child(window)?;

        debug!(%view, url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            view,
            current_url: initial_url,
        })
    }

    /// Set the content provider for serving bundled assets via `peek://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol(PROTOCOL.to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = request_path(&uri);

                match cp.resolve(path) {
                    Some((mime, data)) => {
                        let mut response = Response::new(Cow::from(data.into_owned()));
                        if let Ok(value) = mime.parse() {
                            response
                                .headers_mut()
                                .insert(wry::http::header::CONTENT_TYPE, value);
                        }
                        response
                    }
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        let mut response = Response::new(Cow::from(b"Not Found".to_vec()));
                        *response.status_mut() = StatusCode::NOT_FOUND;
                        response
                    }
                }
            });
        }
        builder
    }
}
