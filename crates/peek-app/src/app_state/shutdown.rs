//! Graceful shutdown: persist placement, close the dialog, destroy webviews.

use super::core::PeekApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl PeekApp {
    /// Perform graceful shutdown.
    ///
    /// The placement is saved while the main window still exists. The
    /// session goes last because it owns the player view.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(session) = self.session.as_mut() {
            session.on_window_closing();
        }

        if let Some(registry) = self.webviews.as_mut() {
            registry.destroy_all();
        }
        self.settings_window.clear();

        if let Some(mut session) = self.session.take() {
            if let Some(mut player) = session.detach_surface() {
                player.mark_destroyed();
            }
        }

        tracing::info!("Graceful shutdown complete");
    }
}
