//! HERE Geocoding & Search adapter.
//!
//! Place search goes to the discover endpoint; autocomplete uses the
//! geocode endpoint on a separate host.

pub mod types;

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use directory_core::{Address, Coordinates, Poi, PreferenceStore, Provider};
use reqwest::{Client, Url};

use crate::backend::PlacesBackend;
use crate::distance::{is_outside_radius, radius_meters};
use crate::error::ProviderError;
use crate::http::{build_client, elapsed_ms, endpoint, send_json};
use types::{ContactValue, DiscoverResponse, GeocodeResponse, HereAddress, PlaceItem};

const DEFAULT_DISCOVER_BASE_URL: &str = "https://discover.search.hereapi.com";
const DEFAULT_GEOCODE_BASE_URL: &str = "https://geocode.search.hereapi.com";

/// Upper bound on the `radius` hint.
pub const MAX_RADIUS_METERS: f64 = 50_000.0;
const SEARCH_LIMIT: &str = "30";
const AUTOCOMPLETE_LIMIT: &str = "5";

/// Client for the HERE discover and geocode APIs.
pub struct HereClient {
    client: Client,
    api_key: Option<String>,
    discover_url: Url,
    geocode_url: Url,
    preferences: Arc<dyn PreferenceStore>,
}

impl HereClient {
    /// Creates a client pointed at the production HERE hosts.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new(
        api_key: Option<&str>,
        user_agent: &str,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Result<Self, ProviderError> {
        Self::with_base_urls(
            api_key,
            user_agent,
            preferences,
            DEFAULT_DISCOVER_BASE_URL,
            DEFAULT_GEOCODE_BASE_URL,
        )
    }

    /// Creates a client with custom discover and geocode hosts. Tests pass
    /// the same mock server URI for both.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built, or
    /// [`ProviderError::InvalidBaseUrl`] if either base URL does not parse.
    pub fn with_base_urls(
        api_key: Option<&str>,
        user_agent: &str,
        preferences: Arc<dyn PreferenceStore>,
        discover_base_url: &str,
        geocode_base_url: &str,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(user_agent)?,
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_owned),
            discover_url: endpoint(discover_base_url, "v1/discover")?,
            geocode_url: endpoint(geocode_base_url, "v1/geocode")?,
            preferences,
        })
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential { provider: "here" })
    }
}

#[async_trait]
impl PlacesBackend for HereClient {
    fn provider(&self) -> Provider {
        Provider::Here
    }

    async fn try_search(&self, query: &str, origin: Coordinates) -> Result<Vec<Poi>, ProviderError> {
        let api_key = self.api_key()?;
        let prefs = self.preferences.snapshot();
        let radius = radius_meters(prefs.search_radius_miles, MAX_RADIUS_METERS);
        let query = match query.trim() {
            "" => "*",
            trimmed => trimmed,
        };

        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", api_key.to_owned()),
            ("q", query.to_owned()),
        ];
        if !origin.is_origin() {
            params.push(("at", format!("{},{}", origin.lat, origin.lon)));
            params.push(("radius", format!("{radius:.0}")));
        }
        params.push(("limit", SEARCH_LIMIT.to_owned()));

        let started = Instant::now();
        let response: DiscoverResponse = send_json(
            self.client.get(self.discover_url.clone()).query(&params),
            &format!("here discover(q={query})"),
        )
        .await?;

        tracing::debug!(
            provider = "here",
            query,
            %origin,
            radius_meters = radius,
            items = response.items.len(),
            http_ms = elapsed_ms(started),
            "search completed"
        );

        let pois: Vec<Poi> = response
            .items
            .into_iter()
            .filter_map(|item| item_to_poi(item, origin, radius))
            .collect();

        let outside = pois.iter().filter(|p| p.is_outside_search_radius).count();
        if outside > 0 {
            tracing::debug!(provider = "here", outside, "results beyond requested radius");
        }
        Ok(pois)
    }

    async fn try_autocomplete(&self, query: &str) -> Result<Vec<String>, ProviderError> {
        let api_key = self.api_key()?;
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let response: GeocodeResponse = send_json(
            self.client.get(self.geocode_url.clone()).query(&[
                ("apiKey", api_key),
                ("q", query),
                ("limit", AUTOCOMPLETE_LIMIT),
            ]),
            &format!("here geocode(q={query})"),
        )
        .await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| item.title.or_else(|| item.address.and_then(|a| a.label)))
            .collect())
    }
}

fn first_value(values: Option<Vec<ContactValue>>) -> Option<String> {
    values?.into_iter().next().and_then(|v| v.value)
}

/// Maps one discover item; items without a title are dropped.
///
/// The provider may ignore the radius hint, so results farther than
/// `radius` from `origin` are flagged rather than removed.
fn item_to_poi(item: PlaceItem, origin: Coordinates, radius: f64) -> Option<Poi> {
    let title = item.title?;
    let addr = item.address.unwrap_or_default();
    let country = resolve_country(&addr);
    let street = compose_street(addr.house_number.as_deref(), addr.street.as_deref());

    let mut poi = Poi::new(
        title,
        Address {
            street,
            city: addr.city.unwrap_or_default(),
            state: addr.state.unwrap_or_default(),
            zip: addr.postal_code.unwrap_or_default(),
            country,
        },
    );

    let mut hours: Vec<String> = Vec::new();
    for text in item
        .opening_hours
        .unwrap_or_default()
        .into_iter()
        .flat_map(|h| h.text.unwrap_or_default())
    {
        let text = text.trim();
        if !text.is_empty() && !hours.iter().any(|h| h == text) {
            hours.push(text.to_owned());
        }
    }
    poi.hours = hours;

    if let Some(contact) = item.contacts.unwrap_or_default().into_iter().next() {
        poi.phone = first_value(contact.phone);
        poi.website = first_value(contact.www);
    }

    poi.description = item
        .categories
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ");

    if let Some(position) = item.position {
        poi.lat = position.lat;
        poi.lng = position.lng;
    }
    poi.is_outside_search_radius = is_outside_radius(origin, poi.coordinates(), radius);
    Some(poi)
}

/// A 2-letter code is kept as-is. For anything longer the human-readable
/// name is preferred so region inference can resolve it, falling back to
/// the raw code.
fn resolve_country(addr: &HereAddress) -> String {
    match addr.country_code.as_deref().map(str::trim) {
        None | Some("") => addr.country_name.clone().unwrap_or_default(),
        Some(code) if code.chars().count() == 2 => code.to_owned(),
        Some(code) => addr
            .country_name
            .clone()
            .unwrap_or_else(|| code.to_owned()),
    }
}

fn compose_street(house_number: Option<&str>, street: Option<&str>) -> String {
    let house_number = house_number.map(str::trim).filter(|s| !s.is_empty());
    let street = street.map(str::trim).filter(|s| !s.is_empty());
    match (house_number, street) {
        (Some(number), Some(street)) => format!("{number} {street}"),
        (Some(only), None) | (None, Some(only)) => only.to_owned(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(code: Option<&str>, name: Option<&str>) -> HereAddress {
        HereAddress {
            country_code: code.map(str::to_owned),
            country_name: name.map(str::to_owned),
            ..HereAddress::default()
        }
    }

    #[test]
    fn country_keeps_alpha2_code() {
        assert_eq!(resolve_country(&address(Some("DE"), Some("Deutschland"))), "DE");
    }

    #[test]
    fn country_prefers_name_over_alpha3() {
        assert_eq!(resolve_country(&address(Some("DEU"), Some("Deutschland"))), "Deutschland");
        assert_eq!(resolve_country(&address(Some("DEU"), None)), "DEU");
    }

    #[test]
    fn country_without_code_uses_name() {
        assert_eq!(resolve_country(&address(None, Some("France"))), "France");
        assert_eq!(resolve_country(&address(Some(""), None)), "");
    }

    #[test]
    fn street_puts_house_number_first() {
        assert_eq!(compose_street(Some("10"), Some("Downing Street")), "10 Downing Street");
        assert_eq!(compose_street(None, Some("Downing Street")), "Downing Street");
        assert_eq!(compose_street(Some("10"), Some(" ")), "10");
        assert_eq!(compose_street(None, None), "");
    }

    #[test]
    fn item_hours_are_trimmed_and_deduplicated() {
        let item: PlaceItem = serde_json::from_value(serde_json::json!({
            "title": "Bakery",
            "openingHours": [
                { "text": ["Mon-Fri: 07:00 - 18:00", " "], "isOpen": true },
                { "text": [" Mon-Fri: 07:00 - 18:00 ", "Sat: 08:00 - 12:00"] }
            ]
        }))
        .unwrap();

        let poi = item_to_poi(item, Coordinates::ORIGIN, 1_000.0).unwrap();
        assert_eq!(poi.hours, vec!["Mon-Fri: 07:00 - 18:00", "Sat: 08:00 - 12:00"]);
        assert!(!poi.is_outside_search_radius);
    }

    #[test]
    fn item_without_title_is_dropped() {
        let item: PlaceItem = serde_json::from_value(serde_json::json!({
            "address": { "street": "Main St" }
        }))
        .unwrap();
        assert!(item_to_poi(item, Coordinates::ORIGIN, 1_000.0).is_none());
    }

    #[test]
    fn null_lists_map_as_empty() {
        let item: PlaceItem = serde_json::from_value(serde_json::json!({
            "title": "Tempelhofer Feld",
            "contacts": [{ "phone": null, "www": [{ "value": "https://thf.berlin" }] }],
            "categories": null,
            "openingHours": [{ "text": null }]
        }))
        .unwrap();
        let poi = item_to_poi(item, Coordinates::ORIGIN, 1.0).unwrap();

        assert!(poi.phone.is_none());
        assert_eq!(poi.website.as_deref(), Some("https://thf.berlin"));
        assert_eq!(poi.description, "");
        assert!(poi.hours.is_empty());
    }
}
