//! HERE Geocoding & Search v7 response types.

use serde::Deserialize;

/// `GET /v1/discover` response.
#[derive(Debug, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub items: Vec<PlaceItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceItem {
    pub title: Option<String>,
    pub address: Option<HereAddress>,
    pub position: Option<Position>,
    pub contacts: Option<Vec<Contacts>>,
    pub categories: Option<Vec<Category>>,
    pub opening_hours: Option<Vec<OpeningHours>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HereAddress {
    pub label: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country_name: Option<String>,
    /// ISO 3166-1 alpha-3 in practice, though alpha-2 is accepted too.
    pub country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Position {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Contacts {
    pub phone: Option<Vec<ContactValue>>,
    pub www: Option<Vec<ContactValue>>,
}

#[derive(Debug, Deserialize)]
pub struct ContactValue {
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Category {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpeningHours {
    pub text: Option<Vec<String>>,
}

/// `GET /v1/geocode` response, used for autocomplete.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub items: Vec<GeocodeItem>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeItem {
    pub title: Option<String>,
    pub address: Option<GeocodeAddress>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeAddress {
    pub label: Option<String>,
}
