//! Shared constants for the app state.

use std::time::Duration;

/// Upper bound on how long the event loop sleeps between webview polls.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Height of the chrome page's title bar, in logical pixels. The player
/// starts just below it until the chrome reports the real frame.
pub(super) const CHROME_BAR_HEIGHT: u32 = 28;
