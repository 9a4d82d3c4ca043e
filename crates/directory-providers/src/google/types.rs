//! Google Places API (New) request and response types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest<'a> {
    pub text_query: &'a str,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_bias: Option<LocationBias>,
}

#[derive(Debug, Serialize)]
pub struct AutocompleteRequest<'a> {
    pub input: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LocationBias {
    pub circle: Circle,
}

#[derive(Debug, Serialize)]
pub struct Circle {
    pub center: LatLng,
    /// Meters; the API rejects values above 50 000.
    pub radius: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub display_name: Option<LocalizedText>,
    pub formatted_address: Option<String>,
    pub address_components: Option<Vec<AddressComponent>>,
    pub location: Option<LatLng>,
    pub regular_opening_hours: Option<OpeningHours>,
    pub national_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub website_uri: Option<String>,
    pub types: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct LocalizedText {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponent {
    pub long_text: Option<String>,
    pub short_text: Option<String>,
    pub types: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub weekday_descriptions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// One suggestion; query predictions carry no place and are skipped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub place_prediction: Option<PlacePrediction>,
}

#[derive(Debug, Deserialize)]
pub struct PlacePrediction {
    pub text: Option<LocalizedText>,
}
