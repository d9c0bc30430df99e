//! Session logic for QuickPeek: keeps the embedded player positioned and
//! configured in response to the chrome page, the settings dialog, the
//! player's own fullscreen changes and host window events.
//!
//! Nothing in this crate touches a real window or webview. The
//! collaborators are the traits in `peek_common::surface`, implemented by
//! `peek-webview` and `peek-app`.

pub mod applicator;
pub mod channel;
pub mod isolation;
pub mod reconciler;
pub mod report;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use applicator::{normalize_url, ApplyOutcome, SettingsApplicator};
pub use channel::{is_kind_allowed, ChannelError, ControlCommand, Reply, SurfaceSignal};
pub use isolation::IsolationSchedule;
pub use reconciler::{validate_request, BoundsOutcome, BoundsReconciler, FullscreenOverride};
pub use report::report;
pub use session::{Session, SessionOptions};
