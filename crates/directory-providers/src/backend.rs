//! The capability every place-search provider implements.

use async_trait::async_trait;
use directory_core::{Coordinates, Poi, Provider};

use crate::error::ProviderError;

/// A place-search provider.
///
/// Implementors supply the fallible `try_*` methods. The provided `search`
/// and `autocomplete` degrade every [`ProviderError`] to an empty result
/// and log it. Cancellation is not an error here: dropping the returned
/// future abandons the request without reaching either path.
#[async_trait]
pub trait PlacesBackend: Send + Sync {
    fn provider(&self) -> Provider;

    /// Searches for `query` near `origin`. An origin of `(0, 0)` means no
    /// location bias.
    async fn try_search(&self, query: &str, origin: Coordinates) -> Result<Vec<Poi>, ProviderError>;

    async fn try_autocomplete(&self, query: &str) -> Result<Vec<String>, ProviderError>;

    async fn search(&self, query: &str, origin: Coordinates) -> Vec<Poi> {
        match self.try_search(query, origin).await {
            Ok(pois) => pois,
            Err(err) => {
                log_degraded(self.provider(), "search", &err);
                Vec::new()
            }
        }
    }

    async fn autocomplete(&self, query: &str) -> Vec<String> {
        match self.try_autocomplete(query).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                log_degraded(self.provider(), "autocomplete", &err);
                Vec::new()
            }
        }
    }
}

/// Forward geocoding of a free-text place name.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Coordinates of the best match for `place`, or `None` when nothing
    /// matched or the lookup failed.
    async fn coordinates(&self, place: &str) -> Option<Coordinates>;
}

pub(crate) fn log_degraded(provider: Provider, operation: &str, err: &ProviderError) {
    if err.is_missing_credential() {
        tracing::error!(%provider, operation, error = %err, "provider call skipped");
    } else {
        tracing::warn!(%provider, operation, error = %err, "provider call failed; returning no results");
    }
}
