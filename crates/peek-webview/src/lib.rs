//! WebView bridge for QuickPeek.
//!
//! Wraps the `wry` crate to provide:
//! - Managed WebView instances for the chrome, settings and player views
//! - Bidirectional IPC (Rust <-> JavaScript) with request ids
//! - The `peek://` custom protocol serving the built-in UI pages
//! - A player surface adapter implementing `EmbeddedSurface`
//! - The scripts injected into the player page

pub mod bounds;
pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod player;
pub mod scripts;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::IpcMessage;
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
pub use player::PlayerSurface;
