//! Native error dialog for failures the user must see.

use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::error;

/// Log `message` and show it in a blocking native error dialog.
///
/// Only for startup failures: the dialog runs its own modal loop.
pub fn show_fatal_error(title: &str, message: &str) {
    error!(title, "{message}");
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
