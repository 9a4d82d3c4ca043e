//! OpenStreetMap Nominatim geocoding.
//!
//! Forward geocoding resolves the user's default location to a search
//! origin; reverse geocoding turns a coordinate into a display address.
//! Nominatim needs no key but rejects requests without a `User-Agent`.

use async_trait::async_trait;
use directory_core::Coordinates;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::backend::Geocoder;
use crate::error::ProviderError;
use crate::http::{build_client, endpoint, send_json};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

/// Nominatim returns coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

pub struct NominatimClient {
    client: Client,
    reverse_url: Url,
    search_url: Url,
}

impl NominatimClient {
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new(user_agent: &str) -> Result<Self, ProviderError> {
        Self::with_base_url(user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built, or
    /// [`ProviderError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(user_agent: &str, base_url: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(user_agent)?,
            reverse_url: endpoint(base_url, "reverse")?,
            search_url: endpoint(base_url, "search")?,
        })
    }

    /// Display address for `at`, or `None` when nothing is there.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Http`] on network failure or timeout.
    /// - [`ProviderError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ProviderError::Deserialize`] if the body is not the expected shape.
    pub async fn try_reverse(&self, at: Coordinates) -> Result<Option<String>, ProviderError> {
        let response: ReverseResponse = send_json(
            self.client.get(self.reverse_url.clone()).query(&[
                ("format", "json".to_owned()),
                ("lat", at.lat.to_string()),
                ("lon", at.lon.to_string()),
            ]),
            &format!("nominatim reverse({at})"),
        )
        .await?;
        Ok(response.display_name.filter(|n| !n.trim().is_empty()))
    }

    /// Coordinates of the first match for `place`.
    ///
    /// A result whose `lat`/`lon` strings do not parse counts as no match.
    ///
    /// # Errors
    ///
    /// Same as [`NominatimClient::try_reverse`].
    pub async fn try_coordinates(&self, place: &str) -> Result<Option<Coordinates>, ProviderError> {
        let results: Vec<SearchResult> = send_json(
            self.client
                .get(self.search_url.clone())
                .query(&[("q", place), ("format", "json"), ("limit", "1")]),
            &format!("nominatim search(q={place})"),
        )
        .await?;

        Ok(results.into_iter().next().and_then(|r| {
            let lat = r.lat.trim().parse().ok()?;
            let lon = r.lon.trim().parse().ok()?;
            Some(Coordinates::new(lat, lon))
        }))
    }

    /// Like [`NominatimClient::try_reverse`], with failures logged and
    /// reported as `None`.
    pub async fn reverse(&self, at: Coordinates) -> Option<String> {
        self.try_reverse(at).await.unwrap_or_else(|err| {
            tracing::warn!(provider = "nominatim", %at, error = %err, "reverse geocoding failed");
            None
        })
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn coordinates(&self, place: &str) -> Option<Coordinates> {
        let place = place.trim();
        if place.is_empty() {
            return None;
        }
        match self.try_coordinates(place).await {
            Ok(found) => {
                tracing::debug!(provider = "nominatim", place, found = found.is_some(), "geocoded");
                found
            }
            Err(err) => {
                tracing::warn!(provider = "nominatim", place, error = %err, "geocoding failed");
                None
            }
        }
    }
}
