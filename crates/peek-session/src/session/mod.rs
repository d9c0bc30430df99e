//! The session context: one player surface inside one host window.
//!
//! Everything the control channel, the page-load notifications and the
//! window events need lives here, so handlers are plain methods rather
//! than closures over shared globals. All methods run on the event-loop
//! thread.


use std::time::{Duration, Instant};

use peek_common::{
    ContentSize, EmbeddedSurface, HostWindow, SessionError, SessionId, Settings, SettingsDialog,
    SettingsSubmission, ViewKind,
};
use peek_config::schema::PlayerConfig;
use peek_config::store::{self, StateStore, SETTINGS_KEY, WINDOW_BOUNDS_KEY};
use serde_json::json;
use tracing::{debug, info, info_span, Span};

use crate::applicator::{self, ApplyOutcome, SettingsApplicator};
use crate::channel::{ControlCommand, Reply, SurfaceSignal};
use crate::isolation::IsolationSchedule;
use crate::reconciler::{BoundsOutcome, BoundsReconciler, DEFAULT_BOUNDS_SLACK};
use crate::report::report;

/// Session tunables, usually taken from `[player]` in the config.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub default_settings: Settings,
    pub fallback_url: String,
    pub bounds_slack: f64,
    pub isolation_delay: Duration,
    /// Script run after each page load. `None` disables isolation.
    pub isolation_script: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        let defaults = Settings::default();
        Self {
            fallback_url: defaults.url.clone(),
            default_settings: defaults,
            bounds_slack: DEFAULT_BOUNDS_SLACK,
            isolation_delay: Duration::from_millis(2500),
            isolation_script: None,
        }
    }
}

impl SessionOptions {
    pub fn from_config(player: &PlayerConfig, isolation_script: impl Into<String>) -> Self {
        Self {
            default_settings: player.default_settings(),
            fallback_url: player.fallback_url.clone(),
            bounds_slack: player.bounds_slack,
            isolation_delay: player.isolation_delay(),
            isolation_script: player.isolation_enabled.then(|| isolation_script.into()),
        }
    }
}

pub struct Session<S, W> {
    /// Carries the session id on every log line.
    span: Span,
    /// `None` when the player surface could not be created.
    surface: Option<S>,
    window: W,
    store: Box<dyn StateStore>,
    settings: Settings,
    default_settings: Settings,
    reconciler: BoundsReconciler,
    applicator: SettingsApplicator,
    isolation: IsolationSchedule,
    isolation_script: Option<String>,
}

impl<S: EmbeddedSurface, W: HostWindow> Session<S, W> {
    /// Build a session, loading the persisted settings from `store`.
    pub fn new(
        surface: Option<S>,
        window: W,
        store: Box<dyn StateStore>,
        options: SessionOptions,
    ) -> Self {
        let id = SessionId::new();
        let span = info_span!("session", id = %id.short());
        let settings = load_settings(store.as_ref(), &options.default_settings);
        Self {
            span,
            surface,
            window,
            store,
            settings,
            default_settings: options.default_settings,
            reconciler: BoundsReconciler::new(options.bounds_slack),
            applicator: SettingsApplicator::new(options.fallback_url),
            isolation: IsolationSchedule::new(options.isolation_delay),
            isolation_script: options.isolation_script,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn reconciler(&self) -> &BoundsReconciler {
        &self.reconciler
    }

    /// Drop the player surface, e.g. when its webview has been destroyed.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.isolation.cancel();
        self.surface.take()
    }

    /// Load the initial page. `url_override` is used for this run only and
    /// is not persisted.
    pub fn start(&mut self, url_override: Option<&str>) {
        let _guard = self.span.clone().entered();
        let Some(surface) = self.surface.as_mut().filter(|s| s.is_alive()) else {
            report(&SessionError::SurfaceUnavailable);
            return;
        };

        let url = url_override
            .and_then(applicator::normalize_url)
            .unwrap_or_else(|| self.settings.url.clone());
        info!(url = %url, zoom = self.settings.zoom, "starting session");

        // Zoom is applied once the first load completes.
        if let Err(e) = self.applicator.navigate_with_fallback(surface, &url) {
            report(&e);
        }
    }

    // =========================================================================
    // CONTROL CHANNEL
    // =========================================================================

    /// Handle a command from one of the UI surfaces.
    ///
    /// `id` is the request id to echo on replies. Failures are reported
    /// here and never reach the caller.
    pub fn handle_command(
        &mut self,
        origin: ViewKind,
        command: ControlCommand,
        id: Option<serde_json::Value>,
        dialog: &mut dyn SettingsDialog,
    ) -> Option<Reply> {
        let _guard = self.span.clone().entered();
        debug!(view = %origin, kind = command.kind(), "control command");

        match self.dispatch(origin, command, dialog) {
            Ok(reply) => reply.map(|r| r.with_id(id)),
            Err(e) => {
                report(&e);
                None
            }
        }
    }

    fn dispatch(
        &mut self,
        origin: ViewKind,
        command: ControlCommand,
        dialog: &mut dyn SettingsDialog,
    ) -> Result<Option<Reply>, SessionError> {
        match command {
            ControlCommand::ToggleAlwaysOnTop => {
                let window = self.sender_window(origin, dialog)?;
                let on_top = !window.is_always_on_top();
                window.set_always_on_top(on_top);
                info!(view = %origin, on_top, "always-on-top toggled");
                Ok(Some(Reply::new("always-on-top-status", json!(on_top))))
            }
            ControlCommand::UpdateViewBounds(request) => {
                if !self.window.is_alive() {
                    return Err(SessionError::WindowUnavailable);
                }
                let content = self.window.content_size();
                let surface = live(&mut self.surface)?;
                match self.reconciler.request_bounds(surface, &request, content)? {
                    BoundsOutcome::Applied(b) => debug!(bounds = %b, "player bounds applied"),
                    BoundsOutcome::Saved(b) => debug!(bounds = %b, "player bounds saved for restore"),
                    BoundsOutcome::Rejected => {}
                }
                Ok(None)
            }
            ControlCommand::OpenSettingsWindow => {
                dialog.open_or_focus()?;
                Ok(None)
            }
            ControlCommand::GetSettings => {
                let settings = load_settings(self.store.as_ref(), &self.default_settings);
                let payload = serde_json::to_value(&settings).unwrap_or_default();
                Ok(Some(Reply::new("settings", payload)))
            }
            ControlCommand::SetSettings(submission) => {
                self.set_settings(submission.as_ref(), dialog)?;
                Ok(None)
            }
            ControlCommand::CloseSettingsWindow => {
                if dialog.is_open() {
                    dialog.close();
                }
                Ok(None)
            }
            ControlCommand::StartWindowDrag => {
                self.sender_window(origin, dialog)?.begin_drag()?;
                Ok(None)
            }
        }
    }

    fn sender_window<'a>(
        &'a mut self,
        origin: ViewKind,
        dialog: &'a mut dyn SettingsDialog,
    ) -> Result<&'a mut dyn HostWindow, SessionError> {
        let window: Option<&mut dyn HostWindow> = match origin {
            ViewKind::Settings => dialog.host_window(),
            _ => Some(&mut self.window),
        };
        window
            .filter(|w| w.is_alive())
            .ok_or(SessionError::WindowUnavailable)
    }

    /// Validate, persist, apply, then close the dialog.
    fn set_settings(
        &mut self,
        submission: Option<&SettingsSubmission>,
        dialog: &mut dyn SettingsDialog,
    ) -> Result<(), SessionError> {
        let settings = applicator::prepare(submission)?;
        let surface = live(&mut self.surface)?;

        if let Err(source) = store::put(self.store.as_mut(), SETTINGS_KEY, &settings) {
            report(&SessionError::Persist {
                key: SETTINGS_KEY,
                source,
            });
        }
        self.settings = settings;

        let applied = self.applicator.apply(surface, &self.settings);
        if dialog.is_open() {
            dialog.close();
        }
        match applied? {
            ApplyOutcome::Navigated { url } => info!(url = %url, "settings applied"),
            ApplyOutcome::FellBack { url } => info!(url = %url, "settings applied via fallback"),
            ApplyOutcome::ZoomApplied(zoom) => info!(zoom, "settings applied"),
        }
        Ok(())
    }

    // =========================================================================
    // SURFACE AND WINDOW NOTIFICATIONS
    // =========================================================================

    pub fn on_surface_signal(&mut self, signal: SurfaceSignal) {
        let _guard = self.span.clone().entered();
        if let Err(e) = self.surface_signal(signal) {
            report(&e);
        }
    }

    fn surface_signal(&mut self, signal: SurfaceSignal) -> Result<(), SessionError> {
        if !self.window.is_alive() {
            return Err(SessionError::WindowUnavailable);
        }
        let content = self.window.content_size();
        let surface = live(&mut self.surface)?;
        match signal {
            SurfaceSignal::FullscreenEntered => self.reconciler.enter_fullscreen(surface, content)?,
            SurfaceSignal::FullscreenExited => self.reconciler.exit_fullscreen(surface)?,
        }
        Ok(())
    }

    /// The player finished loading `url`.
    pub fn on_load_finished(&mut self, url: &str, now: Instant) {
        let _guard = self.span.clone().entered();
        let Ok(surface) = live(&mut self.surface) else {
            return;
        };

        let zoom = self
            .applicator
            .take_pending_zoom()
            .unwrap_or(self.settings.zoom);
        debug!(url, zoom, "player load finished");
        if let Err(e) = surface.set_zoom(zoom) {
            report(&SessionError::from(e));
        }

        if self.isolation_script.is_some() {
            self.isolation.arm(now);
        }
    }

    /// Run the isolation payload if its delay has elapsed.
    pub fn poll_isolation(&mut self, now: Instant) {
        if !self.isolation.take_due(now) {
            return;
        }
        let _guard = self.span.clone().entered();
        let (Some(script), Ok(surface)) = (self.isolation_script.as_deref(), live(&mut self.surface))
        else {
            return;
        };
        debug!("running content isolation payload");
        if let Err(e) = surface.run_script(script) {
            report(&SessionError::Payload(e));
        }
    }

    /// When the event loop next needs to wake for this session.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.isolation.deadline()
    }

    pub fn on_window_resized(&mut self, size: ContentSize) {
        let Ok(surface) = live(&mut self.surface) else {
            return;
        };
        if let Err(e) = self.reconciler.window_resized(surface, size) {
            let _guard = self.span.clone().entered();
            report(&SessionError::from(e));
        }
    }

    /// Persist the window placement before the window goes away.
    pub fn on_window_closing(&mut self) {
        let _guard = self.span.clone().entered();
        if !self.window.is_alive() {
            return;
        }
        let placement = self.window.outer_placement();
        match store::put(self.store.as_mut(), WINDOW_BOUNDS_KEY, &placement) {
            Ok(()) => debug!(?placement, "window placement saved"),
            Err(source) => report(&SessionError::Persist {
                key: WINDOW_BOUNDS_KEY,
                source,
            }),
        }
    }
}

/// Read the persisted settings through the same checks a submission gets.
///
/// The record may predate normalization or be hand-edited, so it is read
/// leniently. Only a missing or blank URL falls back to `defaults`.
fn load_settings(store: &dyn StateStore, defaults: &Settings) -> Settings {
    let stored: Option<SettingsSubmission> = store::get_or(store, SETTINGS_KEY, None);
    match applicator::prepare(stored.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            debug!("no usable persisted settings ({e}), using defaults");
            defaults.clone()
        }
    }
}

/// The surface, if it still exists.
fn live<S: EmbeddedSurface>(surface: &mut Option<S>) -> Result<&mut S, SessionError> {
    surface
        .as_mut()
        .filter(|s| s.is_alive())
        .ok_or(SessionError::SurfaceUnavailable)
}
