//! Uniform reporting of session failures.

use peek_common::{FailureKind, SessionError};
use tracing::{debug, error, warn};

/// Log `err` at a level chosen by its kind.
///
/// Session handlers return typed errors; this is the one place they are
/// turned into log lines.
pub fn report(err: &SessionError) {
    let kind = err.kind();
    match kind {
        FailureKind::CollaboratorUnavailable => debug!(?kind, "{err}"),
        FailureKind::Precondition | FailureKind::Persistence => warn!(?kind, "{err}"),
        FailureKind::Navigation
        | FailureKind::Payload
        | FailureKind::Surface
        | FailureKind::Startup => error!(?kind, error = ?err, "{err}"),
    }
}
