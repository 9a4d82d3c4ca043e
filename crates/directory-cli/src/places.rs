//! Place search command handlers.
//!
//! Searches go through a [`SearchSession`] the same way an interactive
//! front end would: one query edit, one spawned search, Ctrl-C cancels it.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use directory_core::{AppConfig, Coordinates, Poi, PreferenceStore, Preferences, Provider};
use directory_format::{compose_address, normalize_street_in_address, PoiDetails};
use directory_providers::{build_backend, NominatimClient};
use directory_search::{FixedLocation, SearchOutcome, SearchSession};

/// Where to search from and with which provider.
#[derive(Debug, Args)]
pub struct OriginArgs {
    /// Override `DIRECTORY_PROVIDER`
    #[arg(long)]
    pub provider: Option<Provider>,
    /// Latitude of the device fix (requires --lon)
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    pub lat: Option<f64>,
    /// Longitude of the device fix (requires --lat)
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,
    /// Geocode this place and search around it instead of the device fix
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub near: Option<String>,
    /// Search radius in miles
    #[arg(long)]
    pub radius: Option<f64>,
}

impl OriginArgs {
    /// Applies the command-line overrides on top of the configured
    /// preferences and device fix.
    pub(crate) fn resolve(
        &self,
        config: &AppConfig,
    ) -> anyhow::Result<(Preferences, Option<Coordinates>)> {
        let mut prefs = Preferences::from_app_config(config);
        let mut device = config.device_location;

        if let Some(radius) = self.radius {
            anyhow::ensure!(
                radius.is_finite() && radius > 0.0,
                "--radius must be a positive number of miles, got {radius}"
            );
            prefs.search_radius_miles = radius;
        }
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            device = Some(Coordinates::new(lat, lon));
            prefs.use_device_location = true;
        }
        if let Some(near) = &self.near {
            prefs.use_device_location = false;
            prefs.default_location = Some(near.clone());
        }
        Ok((prefs, device))
    }
}

fn build_session(config: &AppConfig, args: &OriginArgs) -> anyhow::Result<SearchSession> {
    let (prefs, device) = args.resolve(config)?;
    let preferences: Arc<dyn PreferenceStore> = Arc::new(prefs);
    let provider = args.provider.unwrap_or(config.provider);

    let backend = build_backend(provider, config, Arc::clone(&preferences))
        .with_context(|| format!("failed to build {provider} backend"))?;
    let geocoder = NominatimClient::new(&config.user_agent)
        .context("failed to build geocoding client")?;

    Ok(SearchSession::new(
        backend,
        preferences,
        Arc::new(FixedLocation::new(device)),
        Arc::new(geocoder),
    ))
}

async fn search(config: &AppConfig, query: &str, args: &OriginArgs) -> anyhow::Result<Vec<Poi>> {
    let mut session = build_session(config, args)?;
    let Some(handle) = session.on_query_change(query) else {
        return Ok(Vec::new());
    };

    let outcome = tokio::select! {
        outcome = handle.outcome() => outcome,
        _ = tokio::signal::ctrl_c() => {
            session.cancel();
            anyhow::bail!("search interrupted");
        }
    };

    match outcome {
        SearchOutcome::Completed(pois) => Ok(pois),
        SearchOutcome::PermissionDenied => {
            tracing::warn!("location permission denied; no results");
            Ok(Vec::new())
        }
        SearchOutcome::Cancelled => anyhow::bail!("search was cancelled"),
    }
}

/// Search for places and print them.
///
/// # Errors
///
/// Returns an error if the clients cannot be built, the search is
/// interrupted, or the results cannot be serialized.
pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    args: &OriginArgs,
    json: bool,
) -> anyhow::Result<()> {
    let pois = search(config, query, args).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pois)?);
        return Ok(());
    }
    if pois.is_empty() {
        println!("no results for \"{}\"", query.trim());
        return Ok(());
    }
    for (i, poi) in pois.iter().enumerate() {
        println!("{}", summary_line(i + 1, poi));
    }
    Ok(())
}

/// One result as shown in the list view.
pub(crate) fn summary_line(position: usize, poi: &Poi) -> String {
    let mut line = format!("{position:>2}. {}", poi.name);
    let address = normalize_street_in_address(&compose_address(&poi.address));
    if !address.is_empty() {
        line.push_str(&format!("\n    {address}"));
    }
    if !poi.description.is_empty() {
        line.push_str(&format!("\n    {}", poi.description));
    }
    if poi.is_outside_search_radius {
        line.push_str("\n    (outside search radius)");
    }
    line
}

/// Print autocomplete suggestions.
///
/// # Errors
///
/// Returns an error if the backend cannot be built.
pub(crate) async fn run_autocomplete(
    config: &AppConfig,
    query: &str,
    provider: Option<Provider>,
    json: bool,
) -> anyhow::Result<()> {
    let provider = provider.unwrap_or(config.provider);
    let preferences: Arc<dyn PreferenceStore> = Arc::new(Preferences::from_app_config(config));
    let backend = build_backend(provider, config, preferences)
        .with_context(|| format!("failed to build {provider} backend"))?;

    let suggestions = backend.autocomplete(query).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        for suggestion in &suggestions {
            println!("{suggestion}");
        }
    }
    Ok(())
}

/// Search, then print the detail view of the result at `index` (1-based).
///
/// # Errors
///
/// Returns an error if the search fails or `index` is out of range.
pub(crate) async fn run_details(
    config: &AppConfig,
    query: &str,
    index: usize,
    args: &OriginArgs,
    json: bool,
) -> anyhow::Result<()> {
    let pois = search(config, query, args).await?;
    let poi = index
        .checked_sub(1)
        .and_then(|i| pois.get(i))
        .with_context(|| {
            format!(
                "result {index} not found; \"{}\" returned {} result(s)",
                query.trim(),
                pois.len()
            )
        })?;

    let default_region = config
        .default_region
        .clone()
        .unwrap_or_else(directory_format::system_region);
    let details = PoiDetails::from_poi_with_default_region(poi, &default_region);

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        println!("{}", render_details(&details));
    }
    Ok(())
}

pub(crate) fn render_details(details: &PoiDetails) -> String {
    let mut out = vec![details.name.clone(), String::new(), details.address.clone()];
    if let Some(display) = &details.phone_display {
        match &details.phone_dial {
            Some(dial) if dial != display => out.push(format!("Phone: {display} ({dial})")),
            _ => out.push(format!("Phone: {display}")),
        }
    }
    if let Some(website) = &details.website {
        out.push(format!("Web:   {website}"));
    }
    if !details.description.is_empty() {
        out.push(details.description.clone());
    }
    if !details.hours.is_empty() {
        out.push(String::new());
        out.push("Hours:".to_string());
        out.extend(details.hours.iter().map(|h| format!("  {h}")));
    }
    out.join("\n")
}
