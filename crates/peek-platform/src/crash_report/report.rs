use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

use crate::paths::crash_report_dir;

use super::sanitize::sanitize_secrets;

/// Page the player last finished loading.
static PLAYER_URL: Mutex<Option<String>> = Mutex::new(None);

/// Remember the player's current page for any later crash report.
pub fn record_player_url(url: &str) {
    if let Ok(mut slot) = PLAYER_URL.lock() {
        *slot = Some(url.to_string());
    }
}

/// Writes a crash report to disk when a panic occurs.
///
/// Returns the path to the written report, or `None` if writing failed.
/// Runs inside a panic hook, so every error is swallowed.
///
/// On Unix the report file is owner read/write only.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let dir = crash_report_dir().ok()?;
    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("quickpeek_crash_{stamp}.json"));

    let message = match info.payload().downcast_ref::<&str>() {
        Some(s) => (*s).to_string(),
        None => info
            .payload()
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown panic payload".to_string()),
    };
    let location = info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
    // The panicking thread may hold the lock; never block on it here.
    let player_url = PLAYER_URL.try_lock().ok().and_then(|slot| slot.clone());
    let backtrace = Backtrace::force_capture().to_string();

    let report = build_report(
        &message,
        location.as_deref(),
        player_url.as_deref(),
        &backtrace,
    );

    let _ = std::fs::create_dir_all(&dir);
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}

/// The JSON body of a crash report. Free text is redacted.
pub(super) fn build_report(
    message: &str,
    location: Option<&str>,
    player_url: Option<&str>,
    backtrace: &str,
) -> Value {
    serde_json::json!({
        "app": "QuickPeek",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "platform": format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
        "panic_message": sanitize_secrets(message),
        "location": location,
        "player_url": player_url.map(sanitize_secrets),
        "backtrace": sanitize_secrets(backtrace),
    })
}
