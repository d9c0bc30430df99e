pub mod errors;
pub mod id;
pub mod surface;
pub mod types;

pub use errors::{
    ConfigError, FailureKind, PeekError, PlatformError, SessionError, StoreError, SurfaceError,
};
pub use id::SessionId;
pub use surface::{EmbeddedSurface, HostWindow, SettingsDialog};
pub use types::{
    BoundsRequest, ContentSize, Settings, SettingsSubmission, ViewKind, WindowBounds,
    WindowPlacement,
};

pub type Result<T> = std::result::Result<T, PeekError>;
