//! User preferences consumed by the adapters and the search session.
//!
//! The store itself belongs to the host application; this crate only
//! defines the values read from it and the read-side seam.

use crate::app_config::AppConfig;

/// A snapshot of the user's search preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    /// Search radius in miles.
    pub search_radius_miles: f64,
    /// Use the device's location as the search origin instead of
    /// geocoding `default_location`.
    pub use_device_location: bool,
    /// Free-text location used when the device location is not.
    pub default_location: Option<String>,
}

impl Preferences {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            search_radius_miles: config.search_radius_miles,
            use_device_location: config.use_device_location,
            default_location: config.default_location.clone(),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            search_radius_miles: 5.0,
            use_device_location: true,
            default_location: None,
        }
    }
}

/// Read access to the latest preference values.
///
/// Implementations return the current value at call time; callers read it
/// once per search and never observe changes mid-search.
pub trait PreferenceStore: Send + Sync {
    fn snapshot(&self) -> Preferences;
}

impl PreferenceStore for Preferences {
    fn snapshot(&self) -> Preferences {
        self.clone()
    }
}
