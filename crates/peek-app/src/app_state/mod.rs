//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the main window, the webview registry and the session
//! that keeps the player in place.

mod core;
mod event_handler;
mod host_window;
mod init;
mod ipc_dispatch;
mod polling;
mod settings_window;
mod shutdown;
mod types;

pub use core::PeekApp;
