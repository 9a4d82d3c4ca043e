//! Geoapify places adapter.
//!
//! Searches `/v2/places` by category, optionally narrowed by name, and
//! autocompletes through `/v1/geocode/autocomplete`.

pub mod types;

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use directory_core::{Address, Coordinates, Poi, PreferenceStore, Provider};
use reqwest::{Client, Url};

use crate::backend::PlacesBackend;
use crate::category::{filter_by_query, select_categories, CategorySource};
use crate::distance::radius_meters;
use crate::error::ProviderError;
use crate::http::{build_client, elapsed_ms, endpoint, send_json};
use types::{AutocompleteResponse, PlaceFeature, PlacesResponse};

const DEFAULT_BASE_URL: &str = "https://api.geoapify.com";

/// Upper bound on the `filter=circle` radius.
pub const MAX_RADIUS_METERS: f64 = 10_000.0;
const SEARCH_LIMIT: &str = "30";

/// Client for the Geoapify places and autocomplete APIs.
///
/// The top-level category is per-client state: set it before sharing the
/// client, or build a new client when the user picks a different one.
pub struct GeoapifyClient {
    client: Client,
    api_key: Option<String>,
    places_url: Url,
    autocomplete_url: Url,
    preferences: Arc<dyn PreferenceStore>,
    top_level_category: Option<String>,
}

impl GeoapifyClient {
    /// Creates a client pointed at the production Geoapify API.
    ///
    /// A missing or blank `api_key` is accepted here and reported per call
    /// as [`ProviderError::MissingCredential`].
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new(
        api_key: Option<&str>,
        user_agent: &str,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, user_agent, preferences, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built, or
    /// [`ProviderError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: Option<&str>,
        user_agent: &str,
        preferences: Arc<dyn PreferenceStore>,
        base_url: &str,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(user_agent)?,
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_owned),
            places_url: endpoint(base_url, "v2/places")?,
            autocomplete_url: endpoint(base_url, "v1/geocode/autocomplete")?,
            preferences,
            top_level_category: None,
        })
    }

    /// Sets the category used for free-text queries that match no label.
    /// A blank or `None` value clears it.
    pub fn set_top_level_category(&mut self, category: Option<&str>) {
        self.top_level_category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_owned);
    }

    #[must_use]
    pub fn with_top_level_category(mut self, category: Option<&str>) -> Self {
        self.set_top_level_category(category);
        self
    }

    #[must_use]
    pub fn top_level_category(&self) -> Option<&str> {
        self.top_level_category.as_deref()
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential {
                provider: "geoapify",
            })
    }
}

#[async_trait]
impl PlacesBackend for GeoapifyClient {
    fn provider(&self) -> Provider {
        Provider::Geoapify
    }

    async fn try_search(&self, query: &str, origin: Coordinates) -> Result<Vec<Poi>, ProviderError> {
        let api_key = self.api_key()?;
        let prefs = self.preferences.snapshot();
        let radius = radius_meters(prefs.search_radius_miles, MAX_RADIUS_METERS);
        let query = query.trim();
        let selection = select_categories(query, self.top_level_category.as_deref());
        let mapped = selection.source == CategorySource::Mapped;

        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", api_key.to_owned()),
            ("categories", selection.categories.clone()),
            ("limit", SEARCH_LIMIT.to_owned()),
        ];
        if !query.is_empty() && !mapped {
            params.push(("name", query.to_owned()));
        }
        if !origin.is_origin() {
            params.push(("filter", format!("circle:{},{},{radius:.0}", origin.lon, origin.lat)));
            params.push(("bias", format!("proximity:{},{}", origin.lon, origin.lat)));
        }

        let started = Instant::now();
        let response: PlacesResponse = send_json(
            self.client.get(self.places_url.clone()).query(&params),
            &format!("geoapify places(query={query})"),
        )
        .await?;

        tracing::debug!(
            provider = "geoapify",
            query,
            %origin,
            radius_meters = radius,
            categories = %selection.categories,
            category_source = ?selection.source,
            features = response.features.len(),
            http_ms = elapsed_ms(started),
            "search completed"
        );

        let pois: Vec<Poi> = response.features.into_iter().filter_map(feature_to_poi).collect();
        if mapped || query.is_empty() {
            Ok(pois)
        } else {
            Ok(filter_by_query(pois, query))
        }
    }

    async fn try_autocomplete(&self, query: &str) -> Result<Vec<String>, ProviderError> {
        let api_key = self.api_key()?;
        let response: AutocompleteResponse = send_json(
            self.client
                .get(self.autocomplete_url.clone())
                .query(&[("apiKey", api_key), ("text", query)]),
            &format!("geoapify autocomplete(text={query})"),
        )
        .await?;

        Ok(response
            .features
            .into_iter()
            .filter_map(|f| f.properties.formatted)
            .collect())
    }
}

/// Maps one feature; features with neither a name nor a street are dropped.
fn feature_to_poi(feature: PlaceFeature) -> Option<Poi> {
    let props = feature.properties;
    let name = props.name.clone().or_else(|| props.street.clone())?;

    let street = [props.street.as_deref(), props.housenumber.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let (contact_phone, contact_website) = props
        .contact
        .map(|c| (c.phone, c.website))
        .unwrap_or_default();

    let mut poi = Poi::new(
        name,
        Address {
            street: street.trim().to_owned(),
            city: props.city.unwrap_or_default(),
            state: props.state.unwrap_or_default(),
            zip: props.postcode.unwrap_or_default(),
            country: props.country.unwrap_or_default(),
        },
    );
    poi.phone = props.phone.or(contact_phone);
    poi.website = props.website.or(contact_website);
    poi.description = props.categories.unwrap_or_default().join(", ");
    if let Some(geometry) = feature.geometry {
        poi.lat = geometry.lat();
        poi.lng = geometry.lon();
    }
    Some(poi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(json: serde_json::Value) -> PlaceFeature {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn maps_street_then_housenumber_and_lon_lat_geometry() {
        let poi = feature_to_poi(feature(serde_json::json!({
            "properties": {
                "name": "Café Einstein",
                "street": "Kurfürstenstraße",
                "housenumber": "58",
                "city": "Berlin",
                "postcode": "10785",
                "country": "Germany",
                "categories": ["catering", "catering.cafe"]
            },
            "geometry": { "type": "Point", "coordinates": [13.3556, 52.5025] }
        })))
        .unwrap();

        assert_eq!(poi.address.street, "Kurfürstenstraße 58");
        assert_eq!(poi.address.state, "");
        assert_eq!(poi.description, "catering, catering.cafe");
        assert_eq!(poi.lat, Some(52.5025));
        assert_eq!(poi.lng, Some(13.3556));
    }

    #[test]
    fn name_falls_back_to_street() {
        let poi = feature_to_poi(feature(serde_json::json!({
            "properties": { "street": "Unter den Linden" }
        })))
        .unwrap();
        assert_eq!(poi.name, "Unter den Linden");
        assert!(poi.lat.is_none());
    }

    #[test]
    fn drops_feature_without_name_or_street() {
        assert!(feature_to_poi(feature(serde_json::json!({
            "properties": { "city": "Berlin" }
        })))
        .is_none());
    }

    #[test]
    fn reads_nested_contact() {
        let poi = feature_to_poi(feature(serde_json::json!({
            "properties": {
                "name": "Hotel Adlon",
                "contact": { "phone": "+49 30 22610", "website": "https://example.com" }
            }
        })))
        .unwrap();
        assert_eq!(poi.phone.as_deref(), Some("+49 30 22610"));
        assert_eq!(poi.website.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn null_lists_map_as_empty() {
        let poi = feature_to_poi(feature(serde_json::json!({
            "properties": { "name": "Mauerpark", "categories": null },
            "geometry": { "type": "Point", "coordinates": null }
        })))
        .unwrap();
        assert_eq!(poi.description, "");
        assert!(poi.lat.is_none());
    }
}
