//! Local content serving via custom protocol.
//!
//! Registers a `peek://` custom protocol so the chrome and settings views
//! load their pages without a local HTTP server. The pages are compiled
//! in; a user UI directory, when present, takes precedence so the chrome
//! can be restyled without rebuilding.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use peek_common::ViewKind;

/// Protocol name registered with wry.
pub const PROTOCOL: &str = "peek";

const CHROME_HTML: &str = include_str!("../assets/chrome.html");
const SETTINGS_HTML: &str = include_str!("../assets/settings.html");

/// Path of a UI view's page under `peek://localhost/`.
pub fn page_path(view: ViewKind) -> Option<&'static str> {
    match view {
        ViewKind::Chrome => Some("chrome/index.html"),
        ViewKind::Settings => Some("settings/index.html"),
        ViewKind::Player => None,
    }
}

/// Full `peek://` URL of a UI view's page.
pub fn page_url(view: ViewKind) -> Option<String> {
    page_path(view).map(|p| format!("{PROTOCOL}://localhost/{p}"))
}

/// Strip the scheme and host from a `peek://` request URI.
pub fn request_path(uri: &str) -> &str {
    uri.strip_prefix("peek://localhost/")
        .or_else(|| uri.strip_prefix("peek://localhost"))
        .or_else(|| uri.strip_prefix("peek:///"))
        .or_else(|| uri.strip_prefix("peek://"))
        // WebView2 rewrites custom protocols to http://<scheme>.localhost/
        .or_else(|| uri.strip_prefix("http://peek.localhost/"))
        .unwrap_or("")
}

/// Serves the built-in pages, optionally overridden from a directory.
pub struct ContentProvider {
    /// Directory whose files shadow the built-in pages.
    base_dir: Option<PathBuf>,
    /// In-memory assets: path -> (mime, data).
    overrides: HashMap<String, (String, Vec<u8>)>,
}

impl Default for ContentProvider {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentProvider {
    /// A provider holding only the compiled-in pages.
    pub fn builtin() -> Self {
        let mut provider = Self {
            base_dir: None,
            overrides: HashMap::new(),
        };
        provider.add_override("chrome/index.html", "text/html", CHROME_HTML);
        provider.add_override("settings/index.html", "text/html", SETTINGS_HTML);
        provider
    }

    /// Let files under `base_dir` shadow the built-in pages.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Register an in-memory asset.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
        let clean = clean.trim_start_matches('/');

        if let Some(found) = self.resolve_file(clean) {
            return Some(found);
        }

        self.overrides
            .get(clean)
            .map(|(mime, data)| (Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }

    fn resolve_file(&self, clean: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let base_dir = self.base_dir.as_ref()?;
        let file_path = base_dir.join(clean);

        // Prevent directory traversal (including symlink bypass).
        let canonical_base = std::fs::canonicalize(base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
