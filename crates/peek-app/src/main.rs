mod app_state;
mod cli;
mod icon;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Log targets of the QuickPeek crates. The config's `[logging] level`
/// applies to these only; wry and winit stay at the `RUST_LOG` default.
const LOG_TARGETS: &[&str] = &[
    "quickpeek",
    "peek_session",
    "peek_webview",
    "peek_config",
    "peek_platform",
];

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = peek_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- QuickPeek crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-------------------------\n");

        default_hook(info);
    }));
}

/// Filter directives: `--log-level` verbatim, or the config level applied
/// to every QuickPeek target. Unparseable input falls back to `info`.
fn log_directives(cli_level: Option<&str>, config_level: &str) -> Vec<Directive> {
    let raw: Vec<String> = match cli_level {
        Some(directive) => vec![directive.to_string()],
        None => LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={config_level}"))
            .collect(),
    };

    let parsed: Result<Vec<Directive>, _> = raw.iter().map(|d| d.parse::<Directive>()).collect();
    match parsed {
        Ok(directives) => directives,
        Err(_) => LOG_TARGETS
            .iter()
            .filter_map(|target| format!("{target}=info").parse().ok())
            .collect(),
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Loaded before logging so `[logging] level` can take effect; the
    // outcome is logged right after.
    let config = peek_config::load_config(args.config.as_deref());

    let config_level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".into());
    let mut filter = EnvFilter::from_default_env();
    for directive in log_directives(args.log_level.as_deref(), &config_level) {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("QuickPeek v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        peek_config::PeekConfig::default()
    });
    tracing::debug!("Effective config: {}", peek_config::config_to_json(&config));

    if let Err(e) = peek_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let store = match peek_platform::state_file() {
        Ok(path) => peek_config::open_state_store(&path),
        Err(e) => {
            tracing::warn!("No state file location, settings will not persist: {e}");
            Box::new(peek_config::MemoryStore::new())
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            peek_platform::show_fatal_error(
                "QuickPeek",
                &format!("QuickPeek could not start.\n\n{e}"),
            );
            std::process::exit(1);
        }
    };
    let mut app = app_state::PeekApp::new(config, store, args.url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_level_covers_every_target() {
        let directives = log_directives(None, "debug");
        assert_eq!(directives.len(), LOG_TARGETS.len());
        assert!(directives
            .iter()
            .any(|d| d.to_string() == "peek_session=debug"));
    }

    #[test]
    fn cli_level_is_used_verbatim() {
        let directives = log_directives(Some("wry=trace"), "info");
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].to_string(), "wry=trace");
    }

    #[test]
    fn bad_directive_falls_back_to_info() {
        let directives = log_directives(Some("quickpeek=loud"), "info");
        assert_eq!(directives.len(), LOG_TARGETS.len());
        assert!(directives.iter().all(|d| d.to_string().ends_with("=info")));
    }
}
