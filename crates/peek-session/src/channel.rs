//! Control channel vocabulary: commands from the UI surfaces, signals from
//! the player surface, and replies.
//!
//! Messages arrive as `{kind, payload}` pairs. Each origin has its own
//! allowlist; anything else is rejected before a handler ever sees it.

use peek_common::{BoundsRequest, SettingsSubmission, ViewKind};
use serde::Serialize;

// =============================================================================
// ALLOWLISTS
// =============================================================================

const CHROME_COMMANDS: &[&str] = &[
    "toggle-always-on-top",
    "update-view-bounds",
    "open-settings-window",
    "close-settings-window",
    "start-window-drag",
];

const SETTINGS_COMMANDS: &[&str] = &[
    "toggle-always-on-top",
    "get-settings",
    "set-settings",
    "close-settings-window",
    "start-window-drag",
];

/// The player is untrusted: it may only report fullscreen changes.
const PLAYER_SIGNALS: &[&str] = &["fullscreen-entered", "fullscreen-exited"];

/// Check whether `kind` may be sent by a view of the given kind.
pub fn is_kind_allowed(origin: ViewKind, kind: &str) -> bool {
    let allowed = match origin {
        ViewKind::Chrome => CHROME_COMMANDS,
        ViewKind::Settings => SETTINGS_COMMANDS,
        ViewKind::Player => PLAYER_SIGNALS,
    };
    allowed.contains(&kind)
}

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("{origin} may not send {kind:?}")]
    NotAllowed { origin: ViewKind, kind: String },

    #[error("malformed {kind} payload: {reason}")]
    BadPayload { kind: String, reason: String },
}

/// A command from a UI surface to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlCommand {
    ToggleAlwaysOnTop,
    UpdateViewBounds(BoundsRequest),
    OpenSettingsWindow,
    GetSettings,
    /// `None` when the message carried no settings object at all.
    SetSettings(Option<SettingsSubmission>),
    CloseSettingsWindow,
    StartWindowDrag,
}

impl ControlCommand {
    /// Parse a UI message, enforcing the origin's allowlist.
    pub fn parse(
        origin: ViewKind,
        kind: &str,
        payload: &serde_json::Value,
    ) -> Result<Self, ChannelError> {
        if origin == ViewKind::Player || !is_kind_allowed(origin, kind) {
            return Err(ChannelError::NotAllowed {
                origin,
                kind: kind.to_string(),
            });
        }

        let command = match kind {
            "toggle-always-on-top" => Self::ToggleAlwaysOnTop,
            "update-view-bounds" => {
                let request = serde_json::from_value::<BoundsRequest>(payload.clone())
                    .map_err(|e| bad_payload(kind, e))?;
                Self::UpdateViewBounds(request)
            }
            "open-settings-window" => Self::OpenSettingsWindow,
            "get-settings" => Self::GetSettings,
            "set-settings" => {
                let submission = match payload {
                    serde_json::Value::Null => None,
                    value => Some(
                        serde_json::from_value::<SettingsSubmission>(value.clone())
                            .map_err(|e| bad_payload(kind, e))?,
                    ),
                };
                Self::SetSettings(submission)
            }
            "close-settings-window" => Self::CloseSettingsWindow,
            "start-window-drag" => Self::StartWindowDrag,
            other => {
                // Allowlisted but not mapped above.
                return Err(ChannelError::NotAllowed {
                    origin,
                    kind: other.to_string(),
                });
            }
        };
        Ok(command)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::ToggleAlwaysOnTop => "toggle-always-on-top",
            Self::UpdateViewBounds(_) => "update-view-bounds",
            Self::OpenSettingsWindow => "open-settings-window",
            Self::GetSettings => "get-settings",
            Self::SetSettings(_) => "set-settings",
            Self::CloseSettingsWindow => "close-settings-window",
            Self::StartWindowDrag => "start-window-drag",
        }
    }
}

fn bad_payload(kind: &str, e: serde_json::Error) -> ChannelError {
    ChannelError::BadPayload {
        kind: kind.to_string(),
        reason: e.to_string(),
    }
}

/// A notification raised by the player page itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSignal {
    FullscreenEntered,
    FullscreenExited,
}

impl SurfaceSignal {
    pub fn parse(kind: &str) -> Result<Self, ChannelError> {
        match kind {
            "fullscreen-entered" => Ok(Self::FullscreenEntered),
            "fullscreen-exited" => Ok(Self::FullscreenExited),
            other => Err(ChannelError::NotAllowed {
                origin: ViewKind::Player,
                kind: other.to_string(),
            }),
        }
    }
}

/// A message from the host back to the surface that sent a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub kind: &'static str,
    pub payload: serde_json::Value,
    /// Echo of the request id, for request/response commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
}

impl Reply {
    pub fn new(kind: &'static str, payload: serde_json::Value) -> Self {
        Self {
            kind,
            payload,
            id: None,
        }
    }

    pub fn with_id(mut self, id: Option<serde_json::Value>) -> Self {
        self.id = id;
        self
    }
}
