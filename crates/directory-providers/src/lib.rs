pub mod backend;
pub mod category;
pub mod distance;
pub mod error;
pub mod geoapify;
pub mod google;
pub mod here;
mod http;
pub mod nominatim;

use std::sync::Arc;

use directory_core::{AppConfig, PreferenceStore, Provider};

pub use backend::{Geocoder, PlacesBackend};
pub use category::{CategoryMapping, CategorySelection, CategorySource};
pub use error::ProviderError;
pub use geoapify::GeoapifyClient;
pub use google::GoogleClient;
pub use here::HereClient;
pub use nominatim::NominatimClient;

/// Builds the adapter for `provider` from application configuration.
///
/// A missing API key does not fail here; the adapter reports it on each
/// call instead.
///
/// # Errors
///
/// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
pub fn build_backend(
    provider: Provider,
    config: &AppConfig,
    preferences: Arc<dyn PreferenceStore>,
) -> Result<Arc<dyn PlacesBackend>, ProviderError> {
    let api_key = config.api_key_for(provider);
    let user_agent = config.user_agent.as_str();
    let backend: Arc<dyn PlacesBackend> = match provider {
        Provider::Google => Arc::new(GoogleClient::new(api_key, user_agent, preferences)?),
        Provider::Here => Arc::new(HereClient::new(api_key, user_agent, preferences)?),
        Provider::Geoapify => Arc::new(
            GeoapifyClient::new(api_key, user_agent, preferences)?
                .with_top_level_category(config.top_level_category.as_deref()),
        ),
    };
    tracing::debug!(%provider, has_key = api_key.is_some(), "places backend ready");
    Ok(backend)
}
