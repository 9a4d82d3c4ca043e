//! Great-circle distance and search-radius helpers.

use directory_core::Coordinates;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
pub const METERS_PER_MILE: f64 = 1609.0;

/// Haversine distance between two points, in meters.
#[must_use]
pub fn haversine_meters(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Converts a radius in miles to whole meters, capped at `cap_meters`.
#[must_use]
pub fn radius_meters(miles: f64, cap_meters: f64) -> f64 {
    (miles * METERS_PER_MILE).min(cap_meters).round()
}

/// True when `point` lies farther than `radius_meters` from `origin`.
///
/// An origin of exactly `(0, 0)` means "no location bias" and never flags
/// anything; neither does a result without coordinates.
#[must_use]
pub fn is_outside_radius(origin: Coordinates, point: Option<Coordinates>, radius_meters: f64) -> bool {
    if origin.is_origin() {
        return false;
    }
    point.is_some_and(|point| haversine_meters(origin, point) > radius_meters)
}
