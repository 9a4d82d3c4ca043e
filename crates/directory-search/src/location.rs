//! Device-location seam.

use async_trait::async_trait;
use directory_core::Coordinates;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user has not granted location access.
    #[error("location permission denied")]
    PermissionDenied,

    /// No fix could be obtained (services off, timeout, hardware).
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// A source of the device's current position.
///
/// Implementations must be cancel-safe: the session drops the future when
/// a newer query supersedes the search waiting on it.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// The current fix, or `Ok(None)` when the platform has none to give.
    async fn current_location(&self) -> Result<Option<Coordinates>, LocationError>;
}

/// A provider that always reports the same fix, or none.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(Option<Coordinates>);

impl FixedLocation {
    #[must_use]
    pub const fn new(fix: Option<Coordinates>) -> Self {
        Self(fix)
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Result<Option<Coordinates>, LocationError> {
        Ok(self.0)
    }
}
