//! Applying submitted settings to the player surface.
//!
//! Navigation is asynchronous: the surface reports completion later, and a
//! zoom set before that point is lost when the new page replaces the old
//! one. A URL change therefore arms a one-shot pending zoom that the
//! session applies on the next load completion.

use peek_common::{EmbeddedSurface, SessionError, Settings, SettingsSubmission};
use tracing::{debug, info};

use crate::report::report;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Trim and scheme-qualify a user-entered URL. Blank input gives `None`.
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if has_prefix_ignore_case(trimmed, HTTP_PREFIX) || has_prefix_ignore_case(trimmed, HTTPS_PREFIX)
    {
        Some(trimmed.to_string())
    } else {
        Some(format!("{HTTPS_PREFIX}{trimmed}"))
    }
}

/// Comparison form of a URL: one trailing slash dropped, lowercased.
/// Never used for navigation.
pub fn canonicalize(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_lowercase()
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Turn an untrusted submission into normalized [`Settings`].
pub fn prepare(submission: Option<&SettingsSubmission>) -> Result<Settings, SessionError> {
    let submission = submission.ok_or(SessionError::MissingSettings)?;
    let url = submission
        .url
        .as_deref()
        .and_then(normalize_url)
        .ok_or(SessionError::MissingUrl)?;
    Ok(Settings {
        url,
        zoom: submission.effective_zoom(),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// Navigation started; zoom follows on load completion.
    Navigated { url: String },
    /// The configured URL failed and the fallback was loaded instead.
    FellBack { url: String },
    /// Already on that page; only the zoom changed.
    ZoomApplied(f64),
}

#[derive(Debug)]
pub struct SettingsApplicator {
    pending_zoom: Option<f64>,
    fallback_url: String,
}

impl SettingsApplicator {
    pub fn new(fallback_url: impl Into<String>) -> Self {
        Self {
            pending_zoom: None,
            fallback_url: fallback_url.into(),
        }
    }

    pub fn pending_zoom(&self) -> Option<f64> {
        self.pending_zoom
    }

    /// Consume the zoom armed by the last navigation, if any.
    pub fn take_pending_zoom(&mut self) -> Option<f64> {
        self.pending_zoom.take()
    }

    /// Navigate or re-zoom the surface to match `settings`.
    pub fn apply<S>(&mut self, surface: &mut S, settings: &Settings) -> Result<ApplyOutcome, SessionError>
    where
        S: EmbeddedSurface + ?Sized,
    {
        let current = surface.current_url();
        if canonicalize(&current) == canonicalize(&settings.url) {
            debug!(url = %settings.url, zoom = settings.zoom, "url unchanged, zoom only");
            // A load still in flight must not overwrite the new zoom.
            self.pending_zoom = None;
            surface.set_zoom(settings.zoom)?;
            return Ok(ApplyOutcome::ZoomApplied(settings.zoom));
        }

        info!(from = %current, to = %settings.url, zoom = settings.zoom, "navigating player");
        self.pending_zoom = Some(settings.zoom);
        self.navigate_with_fallback(surface, &settings.url)
    }

    /// Navigate to `url`; on failure, try the fallback URL once.
    ///
    /// The primary failure is reported here. An `Err` means the fallback
    /// failed too.
    pub fn navigate_with_fallback<S>(
        &mut self,
        surface: &mut S,
        url: &str,
    ) -> Result<ApplyOutcome, SessionError>
    where
        S: EmbeddedSurface + ?Sized,
    {
        let source = match surface.navigate(url) {
            Ok(()) => {
                return Ok(ApplyOutcome::Navigated {
                    url: url.to_string(),
                })
            }
            Err(source) => source,
        };
        report(&SessionError::Navigation {
            url: url.to_string(),
            source,
        });

        let fallback = self.fallback_url.clone();
        surface
            .navigate(&fallback)
            .map(|()| ApplyOutcome::FellBack {
                url: fallback.clone(),
            })
            .map_err(|source| SessionError::Navigation {
                url: fallback,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSurface;
    use peek_common::FailureKind;

    #[test]
    fn normalize_adds_scheme() {
        assert_eq!(normalize_url("example.com").as_deref(), Some("https://example.com"));
        assert_eq!(
            normalize_url("  v.qq.com/x  ").as_deref(),
            Some("https://v.qq.com/x")
        );
    }

    #[test]
    fn normalize_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://a.b").as_deref(), Some("http://a.b"));
        assert_eq!(normalize_url("HTTPS://A.B/").as_deref(), Some("HTTPS://A.B/"));
        assert_eq!(normalize_url("Http://x").as_deref(), Some("Http://x"));
    }

    #[test]
    fn normalize_rejects_blank() {
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url("   \t"), None);
    }

    #[test]
    fn normalize_does_not_treat_lookalikes_as_scheme() {
        assert_eq!(
            normalize_url("httpsite.com").as_deref(),
            Some("https://httpsite.com")
        );
        // Multi-byte input shorter than the prefix.
        assert_eq!(normalize_url("é").as_deref(), Some("https://é"));
    }

    #[test]
    fn canonicalize_strips_one_slash_and_lowercases() {
        assert_eq!(canonicalize("https://Example.com/"), "https://example.com");
        assert_eq!(canonicalize("https://example.com//"), "https://example.com/");
        assert_eq!(canonicalize("https://example.com"), "https://example.com");
    }

    #[test]
    fn prepare_validates_submission() {
        assert!(matches!(prepare(None), Err(SessionError::MissingSettings)));

        let no_url = SettingsSubmission {
            url: None,
            zoom: Some(2.0),
        };
        let err = prepare(Some(&no_url)).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Precondition);

        let blank = SettingsSubmission {
            url: Some("  ".into()),
            zoom: None,
        };
        assert!(matches!(prepare(Some(&blank)), Err(SessionError::MissingUrl)));

        let ok = SettingsSubmission {
            url: Some("example.com".into()),
            zoom: Some(-1.0),
        };
        let settings = prepare(Some(&ok)).unwrap();
        assert_eq!(settings.url, "https://example.com");
        assert_eq!(settings.zoom, 1.0);
    }

    #[test]
    fn same_url_applies_zoom_only() {
        let mut surface = FakeSurface::new().at_url("https://example.com/");
        let mut applicator = SettingsApplicator::new("https://fallback.test");
        let settings = Settings {
            url: "https://EXAMPLE.com".into(),
            zoom: 1.5,
        };
        let outcome = applicator.apply(&mut surface, &settings).unwrap();
        assert_eq!(outcome, ApplyOutcome::ZoomApplied(1.5));
        assert!(surface.navigations.is_empty());
        assert_eq!(surface.zooms, vec![1.5]);
        assert_eq!(applicator.pending_zoom(), None);
    }

    #[test]
    fn different_url_navigates_and_arms_zoom() {
        let mut surface = FakeSurface::new().at_url("https://example.com/");
        let mut applicator = SettingsApplicator::new("https://fallback.test");
        let settings = Settings {
            url: "https://v.qq.com".into(),
            zoom: 0.8,
        };
        let outcome = applicator.apply(&mut surface, &settings).unwrap();
        assert_eq!(
            outcome,
            ApplyOutcome::Navigated {
                url: "https://v.qq.com".into()
            }
        );
        assert!(surface.zooms.is_empty());
        assert_eq!(applicator.take_pending_zoom(), Some(0.8));
        assert_eq!(applicator.take_pending_zoom(), None);
    }

    #[test]
    fn zoom_only_cancels_pending_zoom() {
        let mut surface = FakeSurface::new();
        let mut applicator = SettingsApplicator::new("https://fallback.test");
        let first = Settings {
            url: "https://a.test".into(),
            zoom: 2.0,
        };
        applicator.apply(&mut surface, &first).unwrap();
        let second = Settings {
            url: "https://a.test/".into(),
            zoom: 1.25,
        };
        applicator.apply(&mut surface, &second).unwrap();
        assert_eq!(applicator.pending_zoom(), None);
        assert_eq!(surface.zooms, vec![1.25]);
    }

    #[test]
    fn failed_navigation_falls_back_once() {
        let mut surface = FakeSurface::new();
        surface.failing_urls.push("https://down.test".into());
        let mut applicator = SettingsApplicator::new("https://fallback.test");

        let outcome = applicator
            .navigate_with_fallback(&mut surface, "https://down.test")
            .unwrap();
        assert_eq!(
            outcome,
            ApplyOutcome::FellBack {
                url: "https://fallback.test".into()
            }
        );
        assert_eq!(surface.navigations, vec!["https://down.test", "https://fallback.test"]);
        assert_eq!(surface.url, "https://fallback.test");
    }

    #[test]
    fn failed_fallback_is_an_error() {
        let mut surface = FakeSurface::new();
        surface.failing_urls = vec!["https://down.test".into(), "https://fallback.test".into()];
        let mut applicator = SettingsApplicator::new("https://fallback.test");

        let err = applicator
            .navigate_with_fallback(&mut surface, "https://down.test")
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::Navigation);
        assert_eq!(surface.navigations.len(), 2);
    }
}
