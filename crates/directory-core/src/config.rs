use crate::app_config::AppConfig;
use crate::model::{Coordinates, Provider};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a pure
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank values count as unset: an empty API key is a missing key.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let provider = or_default("DIRECTORY_PROVIDER", "google")
        .parse::<Provider>()
        .map_err(|reason| invalid("DIRECTORY_PROVIDER", reason))?;

    let search_radius_miles = parse_radius(&or_default("DIRECTORY_SEARCH_RADIUS_MILES", "5"))
        .map_err(|reason| invalid("DIRECTORY_SEARCH_RADIUS_MILES", reason))?;

    let use_device_location = parse_bool(&or_default("DIRECTORY_USE_DEVICE_LOCATION", "true"))
        .map_err(|reason| invalid("DIRECTORY_USE_DEVICE_LOCATION", reason))?;

    let device_lat = optional("DIRECTORY_DEVICE_LAT");
    let device_lon = optional("DIRECTORY_DEVICE_LON");
    let device_location = match (device_lat, device_lon) {
        (None, None) => None,
        (Some(_), None) => {
            return Err(ConfigError::MissingEnvVar("DIRECTORY_DEVICE_LON".to_string()))
        }
        (None, Some(_)) => {
            return Err(ConfigError::MissingEnvVar("DIRECTORY_DEVICE_LAT".to_string()))
        }
        (Some(lat), Some(lon)) => {
            let lat = parse_degrees(&lat, 90.0)
                .map_err(|reason| invalid("DIRECTORY_DEVICE_LAT", reason))?;
            let lon = parse_degrees(&lon, 180.0)
                .map_err(|reason| invalid("DIRECTORY_DEVICE_LON", reason))?;
            Some(Coordinates::new(lat, lon))
        }
    };

    let default_region = match optional("DIRECTORY_DEFAULT_REGION") {
        Some(region) if region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()) => {
            Some(region.to_ascii_uppercase())
        }
        Some(region) => {
            return Err(invalid(
                "DIRECTORY_DEFAULT_REGION",
                format!("'{region}' is not a two-letter region code"),
            ))
        }
        None => None,
    };

    Ok(AppConfig {
        provider,
        log_level: or_default("DIRECTORY_LOG_LEVEL", "info"),
        user_agent: or_default("DIRECTORY_USER_AGENT", "directory/0.1 (places-search)"),
        google_api_key: optional("GOOGLE_PLACES_API_KEY"),
        here_api_key: optional("HERE_API_KEY"),
        geoapify_api_key: optional("GEOAPIFY_API_KEY"),
        search_radius_miles,
        use_device_location,
        default_location: optional("DIRECTORY_DEFAULT_LOCATION"),
        device_location,
        top_level_category: optional("DIRECTORY_TOP_LEVEL_CATEGORY"),
        default_region,
    })
}

fn parse_radius(raw: &str) -> Result<f64, String> {
    let miles = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if !miles.is_finite() || miles <= 0.0 {
        return Err(format!("radius must be a positive number of miles, got {raw}"));
    }
    Ok(miles)
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(format!("expected true/false, got '{other}'")),
    }
}

fn parse_degrees(raw: &str, limit: f64) -> Result<f64, String> {
    let value = raw.parse::<f64>().map_err(|e| e.to_string())?;
    if !value.is_finite() || value.abs() > limit {
        return Err(format!("{raw} is outside [-{limit}, {limit}]"));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
