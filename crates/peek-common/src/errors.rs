use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state store io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("state store is corrupt: {0}")]
    Corrupt(String),

    #[error("failed to serialize {key}: {reason}")]
    Serialize { key: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("dialog error: {0}")]
    DialogError(String),
}

/// Failures reported by an embedded surface or its host.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface has been destroyed")]
    Destroyed,

    #[error("failed to create surface: {0}")]
    Create(String),

    #[error("failed to load {url}: {reason}")]
    Load { url: String, reason: String },

    #[error("failed to set zoom: {0}")]
    Zoom(String),

    #[error("failed to set bounds: {0}")]
    Bounds(String),

    #[error("script evaluation failed: {0}")]
    Script(String),

    #[error("window operation failed: {0}")]
    Window(String),
}

/// Coarse classification used to decide how a failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Caller supplied an unusable request; aborted locally.
    Precondition,
    /// The surface or a window was torn down; the handler became a no-op.
    CollaboratorUnavailable,
    /// Navigation (or its fallback) failed.
    Navigation,
    /// Writing persisted state failed; in-memory state is unaffected.
    Persistence,
    /// The injected content isolation payload failed.
    Payload,
    /// Any other surface operation failed (zoom, bounds).
    Surface,
    /// Construction of the window or surface failed at startup.
    Startup,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("settings submission is missing")]
    MissingSettings,

    #[error("settings submission has no url")]
    MissingUrl,

    #[error("embedded surface is not available")]
    SurfaceUnavailable,

    #[error("host window is not available")]
    WindowUnavailable,

    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: SurfaceError,
    },

    #[error("failed to persist {key}: {source}")]
    Persist {
        key: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("content isolation payload failed: {0}")]
    Payload(#[source] SurfaceError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("startup failed: {0}")]
    Startup(String),
}

impl SessionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingSettings | Self::MissingUrl => FailureKind::Precondition,
            Self::SurfaceUnavailable | Self::WindowUnavailable => {
                FailureKind::CollaboratorUnavailable
            }
            Self::Surface(SurfaceError::Destroyed) => FailureKind::CollaboratorUnavailable,
            Self::Navigation { .. } => FailureKind::Navigation,
            Self::Persist { .. } => FailureKind::Persistence,
            Self::Payload(_) => FailureKind::Payload,
            Self::Surface(_) => FailureKind::Surface,
            Self::Startup(_) => FailureKind::Startup,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PeekError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("player.bounds_slack must be >= 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: player.bounds_slack must be >= 0"
        );
    }

    #[test]
    fn surface_error_display() {
        let err = SurfaceError::Load {
            url: "https://example.com".into(),
            reason: "refused".into(),
        };
        assert_eq!(err.to_string(), "failed to load https://example.com: refused");
        assert_eq!(SurfaceError::Destroyed.to_string(), "surface has been destroyed");
    }

    #[test]
    fn session_error_kinds() {
        assert_eq!(SessionError::MissingUrl.kind(), FailureKind::Precondition);
        assert_eq!(SessionError::MissingSettings.kind(), FailureKind::Precondition);
        assert_eq!(
            SessionError::SurfaceUnavailable.kind(),
            FailureKind::CollaboratorUnavailable
        );
        assert_eq!(
            SessionError::from(SurfaceError::Destroyed).kind(),
            FailureKind::CollaboratorUnavailable
        );
        assert_eq!(
            SessionError::from(SurfaceError::Zoom("nope".into())).kind(),
            FailureKind::Surface
        );
        let nav = SessionError::Navigation {
            url: "https://a".into(),
            source: SurfaceError::Destroyed,
        };
        assert_eq!(nav.kind(), FailureKind::Navigation);
        let persist = SessionError::Persist {
            key: "settings",
            source: StoreError::Corrupt("eof".into()),
        };
        assert_eq!(persist.kind(), FailureKind::Persistence);
        assert!(persist.to_string().contains("settings"));
    }

    #[test]
    fn peek_error_from_variants() {
        let err: PeekError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, PeekError::Config(_)));
        assert!(err.to_string().contains("bad toml"));

        let err: PeekError = SessionError::MissingUrl.into();
        assert!(matches!(err, PeekError::Session(_)));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PeekError = io.into();
        assert!(err.to_string().contains("file missing"));
    }
}
