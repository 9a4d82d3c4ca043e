//! Geoapify response types.
//!
//! Both the places and the autocomplete endpoints return a GeoJSON
//! `FeatureCollection`; only the properties each adapter reads are modelled.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub features: Vec<PlaceFeature>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceFeature {
    #[serde(default)]
    pub properties: PlaceProperties,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaceProperties {
    pub name: Option<String>,
    pub street: Option<String>,
    pub housenumber: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub categories: Option<Vec<String>>,
    /// Newer responses nest phone and website under `contact`.
    pub contact: Option<Contact>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// GeoJSON point geometry; `coordinates` is `[lon, lat]`.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub coordinates: Option<Vec<f64>>,
}

impl Geometry {
    #[must_use]
    pub fn lat(&self) -> Option<f64> {
        self.coordinates.as_ref()?.get(1).copied()
    }

    #[must_use]
    pub fn lon(&self) -> Option<f64> {
        self.coordinates.as_ref()?.first().copied()
    }
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub features: Vec<AutocompleteFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteFeature {
    #[serde(default)]
    pub properties: AutocompleteProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteProperties {
    pub formatted: Option<String>,
}
