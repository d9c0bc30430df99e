//! IPC protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: pages call `window.peek.ipc.send(kind, payload)` or
//!   `window.peek.ipc.request(kind, payload)`, which post
//!   `{kind, payload, id?}` through `window.ipc.postMessage`.
//! - **Rust -> JS**: Rust evaluates a `_dispatch` call in the page. A reply
//!   carrying an `id` resolves the matching `request` promise.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON, `null` when absent).
    #[serde(default)]
    pub payload: serde_json::Value,
    /// Request id for messages that expect a reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script into the chrome and settings views.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.peek = window.peek || {};
    var nextId = 1;
    var pending = {};
    window.peek.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        request: function(kind, payload) {
            var id = nextId++;
            return new Promise(function(resolve) {
                pending[id] = resolve;
                window.ipc.postMessage(JSON.stringify({
                    kind: kind,
                    payload: payload === undefined ? null : payload,
                    id: id
                }));
            });
        },
        // Callbacks registered by page code for messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload, id) {
            if (id !== null && id !== undefined && pending[id]) {
                var resolve = pending[id];
                delete pending[id];
                resolve(payload);
                return;
            }
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(
    kind: &str,
    payload: &serde_json::Value,
    id: Option<&serde_json::Value>,
) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    let id_json = id
        .and_then(|v| serde_json::to_string(v).ok())
        .unwrap_or_else(|| "null".to_string());
    format!(
        "window.peek.ipc._dispatch({}, {}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
        id_json,
    )
}
