//! Geocoding command handlers.

use anyhow::Context;
use directory_core::{AppConfig, Coordinates};
use directory_providers::NominatimClient;

/// Print the coordinates of `place`.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the lookup fails.
pub(crate) async fn run_geocode(config: &AppConfig, place: &str, json: bool) -> anyhow::Result<()> {
    let client = NominatimClient::new(&config.user_agent)?;
    let found = client
        .try_coordinates(place.trim())
        .await
        .with_context(|| format!("geocoding \"{}\" failed", place.trim()))?;

    match (found, json) {
        (Some(at), true) => println!("{}", serde_json::to_string_pretty(&at)?),
        (Some(at), false) => println!("{at}"),
        (None, true) => println!("null"),
        (None, false) => println!("no match for \"{}\"", place.trim()),
    }
    Ok(())
}

/// Print the display address at `lat`,`lon`.
///
/// # Errors
///
/// Returns an error if the coordinates are out of range, the client cannot
/// be built, or the lookup fails.
pub(crate) async fn run_reverse(
    config: &AppConfig,
    lat: f64,
    lon: f64,
    json: bool,
) -> anyhow::Result<()> {
    anyhow::ensure!((-90.0..=90.0).contains(&lat), "latitude {lat} out of range");
    anyhow::ensure!((-180.0..=180.0).contains(&lon), "longitude {lon} out of range");

    let at = Coordinates::new(lat, lon);
    let client = NominatimClient::new(&config.user_agent)?;
    let address = client
        .try_reverse(at)
        .await
        .with_context(|| format!("reverse geocoding {at} failed"))?;

    match (address, json) {
        (address, true) => println!("{}", serde_json::to_string_pretty(&address)?),
        (Some(address), false) => println!("{address}"),
        (None, false) => println!("no address at {at}"),
    }
    Ok(())
}
