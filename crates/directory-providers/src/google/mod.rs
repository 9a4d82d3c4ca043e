//! Google Places API (New) adapter.
//!
//! Both endpoints are `POST` with a JSON body; the key and the response
//! field mask travel as headers rather than query parameters.

pub mod types;

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use directory_core::{Address, Coordinates, Poi, PreferenceStore, Provider};
use reqwest::{Client, RequestBuilder, Url};

use crate::backend::PlacesBackend;
use crate::distance::radius_meters;
use crate::error::ProviderError;
use crate::http::{build_client, elapsed_ms, endpoint, send_json};
use types::{
    AddressComponent, AutocompleteRequest, AutocompleteResponse, Circle, LatLng, LocationBias,
    Place, SearchTextRequest, SearchTextResponse,
};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com";

/// Upper bound on the `locationBias` circle radius.
pub const MAX_RADIUS_METERS: f64 = 50_000.0;
const PAGE_SIZE: u32 = 20;

const SEARCH_FIELD_MASK: &str = "places.displayName,places.formattedAddress,\
places.addressComponents,places.location,places.regularOpeningHours,\
places.nationalPhoneNumber,places.internationalPhoneNumber,places.websiteUri,places.types";
const AUTOCOMPLETE_FIELD_MASK: &str = "suggestions.placePrediction.text";

/// Place types too generic to be worth showing as a description.
const GENERIC_TYPES: &[&str] = &["point_of_interest", "establishment"];

/// Client for Google Places text search and autocomplete.
pub struct GoogleClient {
    client: Client,
    api_key: Option<String>,
    search_url: Url,
    autocomplete_url: Url,
    preferences: Arc<dyn PreferenceStore>,
}

impl GoogleClient {
    /// Creates a client pointed at the production Places API.
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
            search_url: endpoint(base_url, "v1/places:searchText")?,
            autocomplete_url: endpoint(base_url, "v1/places:autocomplete")?,
            preferences,
        })
    }

    fn post(&self, url: &Url, field_mask: &str) -> Result<RequestBuilder, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential { provider: "google" })?;
        Ok(self
            .client
            .post(url.clone())
            .header("X-Goog-Api-Key", api_key)
            .header("X-Goog-FieldMask", field_mask))
    }
}

#[async_trait]
impl PlacesBackend for GoogleClient {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    async fn try_search(&self, query: &str, origin: Coordinates) -> Result<Vec<Poi>, ProviderError> {
        let request = self.post(&self.search_url, SEARCH_FIELD_MASK)?;
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let radius = radius_meters(
            self.preferences.snapshot().search_radius_miles,
            MAX_RADIUS_METERS,
        );
        let location_bias = (!origin.is_origin()).then(|| LocationBias {
            circle: Circle {
                center: LatLng {
                    latitude: origin.lat,
                    longitude: origin.lon,
                },
                radius,
            },
        });
        let body = SearchTextRequest {
            text_query: query,
            page_size: PAGE_SIZE,
            location_bias,
        };

        let started = Instant::now();
        let response: SearchTextResponse = send_json(
            request.json(&body),
            &format!("google searchText(textQuery={query})"),
        )
        .await?;

        tracing::debug!(
            provider = "google",
            query,
            %origin,
            radius_meters = radius,
            places = response.places.len(),
            http_ms = elapsed_ms(started),
            "search completed"
        );

        Ok(response.places.into_iter().filter_map(place_to_poi).collect())
    }

    async fn try_autocomplete(&self, query: &str) -> Result<Vec<String>, ProviderError> {
        let request = self.post(&self.autocomplete_url, AUTOCOMPLETE_FIELD_MASK)?;
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let response: AutocompleteResponse = send_json(
            request.json(&AutocompleteRequest { input: query }),
            &format!("google autocomplete(input={query})"),
        )
        .await?;

        Ok(response
            .suggestions
            .into_iter()
            .filter_map(|s| s.place_prediction?.text?.text)
            .filter(|t| !t.is_empty())
            .collect())
    }
}

fn component<'a>(components: &'a [AddressComponent], kind: &str) -> Option<&'a AddressComponent> {
    components
        .iter()
        .find(|c| c.types.iter().flatten().any(|t| t == kind))
}

fn long_text(components: &[AddressComponent], kind: &str) -> String {
    component(components, kind)
        .and_then(|c| c.long_text.clone())
        .unwrap_or_default()
}

fn short_text(components: &[AddressComponent], kind: &str) -> String {
    component(components, kind)
        .and_then(|c| c.short_text.clone())
        .unwrap_or_default()
}

fn place_address(place: &Place) -> Address {
    let components = place.address_components.as_deref().unwrap_or_default();
    let number = long_text(components, "street_number");
    let route = long_text(components, "route");
    let street = match (number.is_empty(), route.is_empty()) {
        (false, false) => format!("{number} {route}"),
        (true, false) => route,
        (false, true) => number,
        (true, true) => place
            .formatted_address
            .as_deref()
            .and_then(|a| a.split(',').next())
            .map(str::trim)
            .unwrap_or_default()
            .to_owned(),
    };

    let mut city = long_text(components, "locality");
    if city.is_empty() {
        city = long_text(components, "postal_town");
    }

    Address {
        street,
        city,
        state: short_text(components, "administrative_area_level_1"),
        zip: long_text(components, "postal_code"),
        country: short_text(components, "country"),
    }
}

/// Maps one place; places with neither a display name nor a street are
/// dropped.
fn place_to_poi(place: Place) -> Option<Poi> {
    let address = place_address(&place);
    let name = place
        .display_name
        .and_then(|n| n.text)
        .filter(|n| !n.trim().is_empty())
        .or_else(|| (!address.street.is_empty()).then(|| address.street.clone()))?;

    let mut poi = Poi::new(name, address);
    poi.hours = place
        .regular_opening_hours
        .and_then(|h| h.weekday_descriptions)
        .unwrap_or_default();
    poi.phone = place
        .international_phone_number
        .or(place.national_phone_number);
    poi.website = place.website_uri;
    poi.description = place
        .types
        .iter()
        .flatten()
        .filter(|t| !GENERIC_TYPES.contains(&t.as_str()))
        .map(|t| t.replace('_', " "))
        .collect::<Vec<_>>()
        .join(", ");
    if let Some(location) = place.location {
        poi.lat = Some(location.latitude);
        poi.lng = Some(location.longitude);
    }
    Some(poi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(json: serde_json::Value) -> Place {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn address_from_components() {
        let poi = place_to_poi(place(serde_json::json!({
            "displayName": { "text": "Googleplex", "languageCode": "en" },
            "addressComponents": [
                { "longText": "1600", "shortText": "1600", "types": ["street_number"] },
                { "longText": "Amphitheatre Parkway", "shortText": "Amphitheatre Pkwy", "types": ["route"] },
                { "longText": "Mountain View", "shortText": "Mountain View", "types": ["locality", "political"] },
                { "longText": "California", "shortText": "CA", "types": ["administrative_area_level_1", "political"] },
                { "longText": "United States", "shortText": "US", "types": ["country", "political"] },
                { "longText": "94043", "shortText": "94043", "types": ["postal_code"] }
            ],
            "types": ["corporate_office", "point_of_interest", "establishment"]
        })))
        .unwrap();

        assert_eq!(poi.address.street, "1600 Amphitheatre Parkway");
        assert_eq!(poi.address.city, "Mountain View");
        assert_eq!(poi.address.state, "CA");
        assert_eq!(poi.address.zip, "94043");
        assert_eq!(poi.address.country, "US");
        assert_eq!(poi.description, "corporate office");
    }

    #[test]
    fn street_falls_back_to_formatted_address() {
        let poi = place_to_poi(place(serde_json::json!({
            "formattedAddress": "Platz der Republik 1, 11011 Berlin, Germany"
        })))
        .unwrap();
        assert_eq!(poi.address.street, "Platz der Republik 1");
        assert_eq!(poi.name, "Platz der Republik 1");
    }

    #[test]
    fn prefers_international_phone() {
        let poi = place_to_poi(place(serde_json::json!({
            "displayName": { "text": "Shop" },
            "nationalPhoneNumber": "(650) 253-0000",
            "internationalPhoneNumber": "+1 650-253-0000",
            "regularOpeningHours": { "weekdayDescriptions": ["Monday: 9:00 AM – 5:00 PM"] }
        })))
        .unwrap();
        assert_eq!(poi.phone.as_deref(), Some("+1 650-253-0000"));
        assert_eq!(poi.hours.len(), 1);
    }

    #[test]
    fn drops_place_without_name_or_street() {
        assert!(place_to_poi(Place::default()).is_none());
    }

    #[test]
    fn null_lists_map_as_empty() {
        let poi = place_to_poi(place(serde_json::json!({
            "displayName": { "text": "Ferry Building" },
            "addressComponents": null,
            "regularOpeningHours": { "weekdayDescriptions": null },
            "types": null
        })))
        .unwrap();
        assert_eq!(poi.name, "Ferry Building");
        assert_eq!(poi.address.street, "");
        assert!(poi.hours.is_empty());
        assert_eq!(poi.description, "");
    }
}
