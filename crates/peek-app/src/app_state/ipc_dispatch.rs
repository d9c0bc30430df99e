//! Routing of IPC messages from the webviews to the session.

use peek_common::ViewKind;
use peek_session::{ChannelError, ControlCommand, Reply, SurfaceSignal};
use peek_webview::IpcMessage;
use winit::event_loop::ActiveEventLoop;

use super::core::PeekApp;
use super::settings_window::DialogContext;

/// What a raw IPC body turned into.
#[derive(Debug, PartialEq)]
pub(super) enum Routed {
    Signal(SurfaceSignal),
    Command {
        command: ControlCommand,
        id: Option<serde_json::Value>,
    },
}

/// Parse and allowlist-check a message body from `view`.
pub(super) fn route(view: ViewKind, body: &str) -> Result<Routed, RouteError> {
    let msg = IpcMessage::from_json(body).ok_or(RouteError::Malformed)?;
    if view == ViewKind::Player {
        return Ok(Routed::Signal(SurfaceSignal::parse(&msg.kind)?));
    }
    let command = ControlCommand::parse(view, &msg.kind, &msg.payload)?;
    Ok(Routed::Command {
        command,
        id: msg.id,
    })
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub(super) enum RouteError {
    #[error("message is not a {{kind, payload}} object")]
    Malformed,

    #[error(transparent)]
    Channel(#[from] ChannelError),
}

impl PeekApp {
    /// Handle a single IPC message from a webview.
    pub(super) fn handle_ipc_message(
        &mut self,
        view: ViewKind,
        body: &str,
        event_loop: &ActiveEventLoop,
    ) {
        let routed = match route(view, body) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(%view, "IPC message rejected: {e}");
                return;
            }
        };

        let Some(session) = self.session.as_mut() else {
            tracing::debug!(%view, "IPC message before session start, ignored");
            return;
        };

        match routed {
            Routed::Signal(signal) => session.on_surface_signal(signal),
            Routed::Command { command, id } => {
                let mut dialog = DialogContext {
                    slot: &mut self.settings_window,
                    registry: self.webviews.as_mut(),
                    event_loop,
                    config: &self.config.settings_dialog,
                    parent: self.window.as_ref(),
                };
                if let Some(reply) = session.handle_command(view, command, id, &mut dialog) {
                    self.send_reply(view, &reply);
                }
            }
        }
    }

    /// Send a reply back to the view that asked. The view may have closed
    /// in the meantime.
    pub(super) fn send_reply(&self, view: ViewKind, reply: &Reply) {
        let Some(handle) = self.webviews.as_ref().and_then(|r| r.get(view)) else {
            tracing::debug!(%view, kind = reply.kind, "reply target gone");
            return;
        };
        if let Err(e) = handle.send_ipc(reply.kind, &reply.payload, reply.id.as_ref()) {
            tracing::warn!(%view, kind = reply.kind, "failed to send reply: {e}");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chrome_bounds_update_is_routed() {
        let body = r#"{"kind":"update-view-bounds","payload":{"x":0,"y":28,"width":800,"height":572}}"#;
        match route(ViewKind::Chrome, body).unwrap() {
            Routed::Command {
                command: ControlCommand::UpdateViewBounds(req),
                id,
            } => {
                assert_eq!(req.width, 800.0);
                assert!(id.is_none());
            }
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn request_id_is_carried() {
        let body = r#"{"kind":"get-settings","payload":null,"id":7}"#;
        let routed = route(ViewKind::Settings, body).unwrap();
        assert_eq!(
            routed,
            Routed::Command {
                command: ControlCommand::GetSettings,
                id: Some(json!(7)),
            }
        );
    }

    #[test]
    fn player_may_only_signal_fullscreen() {
        let ok = route(ViewKind::Player, r#"{"kind":"fullscreen-entered"}"#).unwrap();
        assert_eq!(ok, Routed::Signal(SurfaceSignal::FullscreenEntered));

        let err = route(ViewKind::Player, r#"{"kind":"set-settings","payload":{}}"#).unwrap_err();
        assert!(matches!(err, RouteError::Channel(ChannelError::NotAllowed { .. })));
    }

    #[test]
    fn chrome_cannot_write_settings() {
        let body = r#"{"kind":"set-settings","payload":{"url":"example.com"}}"#;
        let err = route(ViewKind::Chrome, body).unwrap_err();
        assert!(matches!(err, RouteError::Channel(ChannelError::NotAllowed { .. })));
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(route(ViewKind::Chrome, "not json"), Err(RouteError::Malformed));
        assert_eq!(route(ViewKind::Chrome, "[1,2]"), Err(RouteError::Malformed));
    }

    #[test]
    fn bad_payload_is_rejected() {
        let body = r#"{"kind":"update-view-bounds","payload":"wide"}"#;
        let err = route(ViewKind::Chrome, body).unwrap_err();
        assert!(matches!(err, RouteError::Channel(ChannelError::BadPayload { .. })));
    }
}
