use crate::model::{Coordinates, Provider};

#[derive(Clone)]
pub struct AppConfig {
    pub provider: Provider,
    pub log_level: String,
    pub user_agent: String,
    pub google_api_key: Option<String>,
    pub here_api_key: Option<String>,
    pub geoapify_api_key: Option<String>,
    pub search_radius_miles: f64,
    pub use_device_location: bool,
    pub default_location: Option<String>,
    /// Fixed fix served in place of a device location service.
    pub device_location: Option<Coordinates>,
    pub top_level_category: Option<String>,
    pub default_region: Option<String>,
}

impl AppConfig {
    /// The configured key for `provider`, if any.
    #[must_use]
    pub fn api_key_for(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Google => self.google_api_key.as_deref(),
            Provider::Here => self.here_api_key.as_deref(),
            Provider::Geoapify => self.geoapify_api_key.as_deref(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("provider", &self.provider)
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "here_api_key",
                &self.here_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "geoapify_api_key",
                &self.geoapify_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("search_radius_miles", &self.search_radius_miles)
            .field("use_device_location", &self.use_device_location)
            .field("default_location", &self.default_location)
            .field("device_location", &self.device_location)
            .field("top_level_category", &self.top_level_category)
            .field("default_region", &self.default_region)
            .finish()
    }
}
