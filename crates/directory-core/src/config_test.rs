use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_environment() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.provider, Provider::Google);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.user_agent, "directory/0.1 (places-search)");
    assert!((cfg.search_radius_miles - 5.0).abs() < f64::EPSILON);
    assert!(cfg.use_device_location);
    assert!(cfg.default_location.is_none());
    assert!(cfg.device_location.is_none());
    assert!(cfg.google_api_key.is_none());
    assert!(cfg.here_api_key.is_none());
    assert!(cfg.geoapify_api_key.is_none());
    assert!(cfg.default_region.is_none());
}

#[test]
fn provider_override() {
    let mut map = HashMap::new();
    map.insert("DIRECTORY_PROVIDER", "here");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.provider, Provider::Here);
}

#[test]
fn provider_invalid() {
    let mut map = HashMap::new();
    map.insert("DIRECTORY_PROVIDER", "bing");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DIRECTORY_PROVIDER"),
        "expected InvalidEnvVar(DIRECTORY_PROVIDER), got: {result:?}"
    );
}

#[test]
fn blank_api_key_is_treated_as_missing() {
    let mut map = HashMap::new();
    map.insert("GEOAPIFY_API_KEY", "   ");
    map.insert("HERE_API_KEY", "here-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.geoapify_api_key.is_none());
    assert_eq!(cfg.api_key_for(Provider::Here), Some("here-key"));
}

#[test]
fn search_radius_override() {
    let mut map = HashMap::new();
    map.insert("DIRECTORY_SEARCH_RADIUS_MILES", "12.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.search_radius_miles - 12.5).abs() < f64::EPSILON);
}

#[test]
fn search_radius_rejects_non_positive() {
    for raw in ["0", "-3", "NaN", "far"] {
        let mut map = HashMap::new();
        map.insert("DIRECTORY_SEARCH_RADIUS_MILES", raw);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DIRECTORY_SEARCH_RADIUS_MILES"),
            "expected InvalidEnvVar for {raw}, got: {result:?}"
        );
    }
}

#[test]
fn use_device_location_accepts_common_spellings() {
    for (raw, expected) in [("false", false), ("0", false), ("YES", true), ("1", true)] {
        let mut map = HashMap::new();
        map.insert("DIRECTORY_USE_DEVICE_LOCATION", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.use_device_location, expected, "input {raw}");
    }
}

#[test]
fn use_device_location_invalid() {
    let mut map = HashMap::new();
    map.insert("DIRECTORY_USE_DEVICE_LOCATION", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DIRECTORY_USE_DEVICE_LOCATION"),
        "got: {result:?}"
    );
}

#[test]
fn device_location_requires_both_halves() {
    let mut map = HashMap::new();
    map.insert("DIRECTORY_DEVICE_LAT", "52.52");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "DIRECTORY_DEVICE_LON"),
        "got: {result:?}"
    );
}

#[test]
fn device_location_parses_pair() {
    let mut map = HashMap::new();
    map.insert("DIRECTORY_DEVICE_LAT", "52.52");
    map.insert("DIRECTORY_DEVICE_LON", "13.405");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.device_location, Some(Coordinates::new(52.52, 13.405)));
}

#[test]
fn device_location_rejects_out_of_range_latitude() {
    let mut map = HashMap::new();
    map.insert("DIRECTORY_DEVICE_LAT", "91");
    map.insert("DIRECTORY_DEVICE_LON", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DIRECTORY_DEVICE_LAT"),
        "got: {result:?}"
    );
}

#[test]
fn default_region_is_upper_cased() {
    let mut map = HashMap::new();
    map.insert("DIRECTORY_DEFAULT_REGION", "de");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_region.as_deref(), Some("DE"));
}

#[test]
fn default_region_rejects_names() {
    let mut map = HashMap::new();
    map.insert("DIRECTORY_DEFAULT_REGION", "Germany");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DIRECTORY_DEFAULT_REGION"),
        "got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_keys() {
    let mut map = HashMap::new();
    map.insert("GOOGLE_PLACES_API_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[redacted]"));
}
