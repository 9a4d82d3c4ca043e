//! Search-origin resolution from preferences.

use directory_core::{Coordinates, Preferences};
use directory_providers::Geocoder;

use crate::location::{LocationError, LocationProvider};

/// Resolves the coordinate a search is biased around.
///
/// With device location enabled this asks `location`; otherwise it
/// geocodes the configured default location. Every "no answer" case
/// yields [`Coordinates::ORIGIN`], which adapters treat as unbiased.
///
/// # Errors
///
/// Returns [`LocationError::PermissionDenied`] so the caller can publish
/// an empty result set. [`LocationError::Unavailable`] is logged and
/// resolved to the origin.
pub async fn resolve_origin(
    prefs: &Preferences,
    location: &dyn LocationProvider,
    geocoder: &dyn Geocoder,
) -> Result<Coordinates, LocationError> {
    if prefs.use_device_location {
        return match location.current_location().await {
            Ok(fix) => Ok(fix.unwrap_or(Coordinates::ORIGIN)),
            Err(LocationError::PermissionDenied) => Err(LocationError::PermissionDenied),
            Err(LocationError::Unavailable(reason)) => {
                tracing::warn!(%reason, "device location unavailable; searching without bias");
                Ok(Coordinates::ORIGIN)
            }
        };
    }

    match prefs
        .default_location
        .as_deref()
        .map(str::trim)
        .filter(|place| !place.is_empty())
    {
        Some(place) => Ok(geocoder
            .coordinates(place)
            .await
            .unwrap_or(Coordinates::ORIGIN)),
        None => Ok(Coordinates::ORIGIN),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::location::FixedLocation;

    const SPRINGFIELD: Coordinates = Coordinates::new(39.799, -89.644);
    const BERLIN: Coordinates = Coordinates::new(52.52, 13.405);

    #[derive(Default)]
    struct CountingGeocoder {
        calls: AtomicUsize,
        answer: Option<Coordinates>,
    }

    #[async_trait]
    impl Geocoder for CountingGeocoder {
        async fn coordinates(&self, _place: &str) -> Option<Coordinates> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
        }
    }

    struct Denied;

    #[async_trait]
    impl LocationProvider for Denied {
        async fn current_location(&self) -> Result<Option<Coordinates>, LocationError> {
            Err(LocationError::PermissionDenied)
        }
    }

    struct Broken;

    #[async_trait]
    impl LocationProvider for Broken {
        async fn current_location(&self) -> Result<Option<Coordinates>, LocationError> {
            Err(LocationError::Unavailable("no provider enabled".into()))
        }
    }

    fn fixed_location_prefs(place: Option<&str>) -> Preferences {
        Preferences {
            use_device_location: false,
            default_location: place.map(str::to_owned),
            ..Preferences::default()
        }
    }

    #[tokio::test]
    async fn device_fix_is_used() {
        let geocoder = CountingGeocoder::default();
        let origin = resolve_origin(
            &Preferences::default(),
            &FixedLocation::new(Some(BERLIN)),
            &geocoder,
        )
        .await;
        assert_eq!(origin, Ok(BERLIN));
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_device_fix_is_origin() {
        let origin = resolve_origin(
            &Preferences::default(),
            &FixedLocation::new(None),
            &CountingGeocoder::default(),
        )
        .await;
        assert_eq!(origin, Ok(Coordinates::ORIGIN));
    }

    #[tokio::test]
    async fn unavailable_device_fix_is_origin() {
        let origin =
            resolve_origin(&Preferences::default(), &Broken, &CountingGeocoder::default()).await;
        assert_eq!(origin, Ok(Coordinates::ORIGIN));
    }

    #[tokio::test]
    async fn permission_denied_is_reported() {
        let origin =
            resolve_origin(&Preferences::default(), &Denied, &CountingGeocoder::default()).await;
        assert_eq!(origin, Err(LocationError::PermissionDenied));
    }

    #[tokio::test]
    async fn default_location_is_geocoded() {
        let geocoder = CountingGeocoder {
            answer: Some(SPRINGFIELD),
            ..CountingGeocoder::default()
        };
        let origin = resolve_origin(
            &fixed_location_prefs(Some("Springfield, IL")),
            &Denied,
            &geocoder,
        )
        .await;
        assert_eq!(origin, Ok(SPRINGFIELD));
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_default_location_skips_geocoding() {
        let geocoder = CountingGeocoder::default();
        let origin =
            resolve_origin(&fixed_location_prefs(Some("   ")), &Denied, &geocoder).await;
        assert_eq!(origin, Ok(Coordinates::ORIGIN));
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_geocoding_is_origin() {
        let origin = resolve_origin(
            &fixed_location_prefs(Some("Atlantis")),
            &Denied,
            &CountingGeocoder::default(),
        )
        .await;
        assert_eq!(origin, Ok(Coordinates::ORIGIN));
    }
}
