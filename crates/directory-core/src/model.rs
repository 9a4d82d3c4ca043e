//! Normalized point-of-interest model shared by every provider adapter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A normalized search result.
///
/// Every provider adapter maps its own response schema into this shape.
/// Fields a provider does not supply are left blank rather than omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    /// Display name. Adapters fall back to the street when the provider
    /// omits a name.
    pub name: String,
    pub address: Address,
    /// Provider-formatted opening hours, one entry per range.
    pub hours: Vec<String>,
    /// Raw provider phone string; may carry a `tel:` scheme.
    pub phone: Option<String>,
    /// Category labels joined with `", "`; empty when the provider sent none.
    pub description: String,
    pub website: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Set when the provider returned a result beyond the requested radius.
    #[serde(default)]
    pub is_outside_search_radius: bool,
}

impl Poi {
    /// Creates a result with only a name and address; everything else blank.
    #[must_use]
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
            hours: Vec::new(),
            phone: None,
            description: String::new(),
            website: None,
            lat: None,
            lng: None,
            is_outside_search_radius: false,
        }
    }

    /// Result coordinates, when the provider supplied both halves.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.lat?, self.lng?))
    }
}

/// Postal address. Each field is `""` when unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// The `(0, 0)` pair, used throughout as "no location bias".
    pub const ORIGIN: Self = Self { lat: 0.0, lon: 0.0 };

    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True for exactly `(0, 0)`, which never counts as a real location.
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// The place-search backend a session dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Here,
    Geoapify,
}

impl Provider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Here => "here",
            Self::Geoapify => "geoapify",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "here" => Ok(Self::Here),
            "geoapify" => Ok(Self::Geoapify),
            other => Err(format!(
                "unknown provider '{other}' (expected google, here, or geoapify)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_only_exact_zero_pair() {
        assert!(Coordinates::ORIGIN.is_origin());
        assert!(!Coordinates::new(0.0, 0.1).is_origin());
        assert!(!Coordinates::new(-0.1, 0.0).is_origin());
    }

    #[test]
    fn poi_coordinates_require_both_halves() {
        let mut poi = Poi::new("Cafe", Address::default());
        poi.lat = Some(52.5);
        assert!(poi.coordinates().is_none());
        poi.lng = Some(13.4);
        assert_eq!(poi.coordinates(), Some(Coordinates::new(52.5, 13.4)));
    }

    #[test]
    fn provider_parses_case_insensitively() {
        assert_eq!("HERE".parse::<Provider>(), Ok(Provider::Here));
        assert_eq!(" geoapify ".parse::<Provider>(), Ok(Provider::Geoapify));
        assert!("bing".parse::<Provider>().is_err());
    }

    #[test]
    fn poi_serializes_outside_radius_flag() {
        let poi = Poi::new("Cafe", Address::default());
        let json = serde_json::to_value(&poi).unwrap();
        assert_eq!(json["is_outside_search_radius"], false);
        assert_eq!(json["description"], "");
    }
}
