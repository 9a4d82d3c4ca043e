//! Presentation model for a single POI's detail view.

use directory_core::Poi;
use serde::Serialize;

use crate::address::{compose_address, format_address, normalize_street_in_address};
use crate::hours::format_hours;
use crate::phone::{format_phone, PhoneFormat};
use crate::region::{infer_region_code, infer_region_code_or};

/// Display-ready fields for one POI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoiDetails {
    pub name: String,
    /// Multi-line address, house number first.
    pub address: String,
    /// National-format phone; `None` when the POI has no phone.
    pub phone_display: Option<String>,
    /// E.164 phone for dial actions.
    pub phone_dial: Option<String>,
    pub description: String,
    pub hours: Vec<String>,
    pub website: Option<String>,
    pub region: String,
}

impl PoiDetails {
    /// Builds the detail view, resolving the phone region from the POI's
    /// country and the process locale.
    #[must_use]
    pub fn from_poi(poi: &Poi) -> Self {
        Self::build(poi, &infer_region_code(Some(&poi.address.country)))
    }

    /// Builds the detail view, using `default_region` when the POI carries
    /// no country.
    #[must_use]
    pub fn from_poi_with_default_region(poi: &Poi, default_region: &str) -> Self {
        Self::build(
            poi,
            &infer_region_code_or(Some(&poi.address.country), default_region),
        )
    }

    fn build(poi: &Poi, region: &str) -> Self {
        let one_line = normalize_street_in_address(&compose_address(&poi.address));
        let phone = poi.phone.as_deref().filter(|p| !p.trim().is_empty());

        Self {
            name: poi.name.clone(),
            address: format_address(&one_line),
            phone_display: phone.map(|p| format_phone(Some(p), region, PhoneFormat::Display)),
            phone_dial: phone.map(|p| format_phone(Some(p), region, PhoneFormat::Dial)),
            description: poi.description.clone(),
            hours: poi.hours.iter().map(|h| format_hours(h)).collect(),
            website: poi.website.clone(),
            region: region.to_string(),
        }
    }
}
