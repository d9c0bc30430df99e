use peek_common::ViewKind;

use crate::content::page_url;
use crate::ipc::IPC_INIT_SCRIPT;
use crate::scripts::FULLSCREEN_BRIDGE_SCRIPT;

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
    /// Scripts run before page scripts on every navigation.
    pub init_scripts: Vec<&'static str>,
    /// Restrict navigation to bundled `peek://` pages.
    pub restrict_navigation: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            autoplay: true,
            init_scripts: Vec::new(),
            restrict_navigation: false,
        }
    }
}

impl WebViewConfig {
    /// A trusted UI view (chrome or settings) showing its bundled page with
    /// the IPC bridge installed.
    pub fn ui_page(view: ViewKind) -> Self {
        Self {
            url: page_url(view),
            init_scripts: vec![IPC_INIT_SCRIPT],
            restrict_navigation: true,
            ..Default::default()
        }
    }

    /// The untrusted player view. It starts blank; the session navigates it.
    /// Only the fullscreen listener is injected.
    pub fn player(user_agent: Option<String>, devtools: bool) -> Self {
        Self {
            html: Some(String::from("<html><body style=\"background:#000\"></body></html>")),
            devtools,
            user_agent,
            init_scripts: vec![FULLSCREEN_BRIDGE_SCRIPT],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_page_gets_bridge_and_restriction() {
        let config = WebViewConfig::ui_page(ViewKind::Settings);
        assert_eq!(
            config.url.as_deref(),
            Some("peek://localhost/settings/index.html")
        );
        assert_eq!(config.init_scripts, vec![IPC_INIT_SCRIPT]);
        assert!(config.restrict_navigation);
    }

    #[test]
    fn player_gets_only_fullscreen_bridge() {
        let config = WebViewConfig::player(Some("QuickPeek/0.1".into()), false);
        assert!(config.url.is_none());
        assert!(config.html.is_some());
        assert_eq!(config.init_scripts, vec![FULLSCREEN_BRIDGE_SCRIPT]);
        assert!(!config.restrict_navigation);
        assert_eq!(config.user_agent.as_deref(), Some("QuickPeek/0.1"));
    }
}
