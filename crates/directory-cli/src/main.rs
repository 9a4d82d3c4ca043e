mod geo;
mod phone;
mod places;

use clap::{Parser, Subcommand};
use directory_core::Provider;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "directory")]
#[command(about = "Search places across Google, HERE and Geoapify")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for places near the configured origin
    Search {
        query: String,
        #[command(flatten)]
        origin: places::OriginArgs,
    },
    /// Suggest completions for a partial query
    Autocomplete {
        query: String,
        /// Override `DIRECTORY_PROVIDER`
        #[arg(long)]
        provider: Option<Provider>,
    },
    /// Show the formatted detail view of one search result
    Details {
        query: String,
        /// 1-based position in the result list
        #[arg(long, default_value = "1")]
        index: usize,
        #[command(flatten)]
        origin: places::OriginArgs,
    },
    /// Resolve a place name to coordinates
    Geocode { place: String },
    /// Resolve coordinates to a display address
    Reverse {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Format a phone number for display or dialing
    Phone {
        number: String,
        /// Country name or ISO code used to resolve the region
        #[arg(long)]
        country: Option<String>,
        /// Print the E.164 dial form instead of the national form
        #[arg(long)]
        dial: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = directory_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Search { query, origin } => {
            places::run_search(&config, &query, &origin, cli.json).await?;
        }
        Commands::Autocomplete { query, provider } => {
            places::run_autocomplete(&config, &query, provider, cli.json).await?;
        }
        Commands::Details {
            query,
            index,
            origin,
        } => places::run_details(&config, &query, index, &origin, cli.json).await?,
        Commands::Geocode { place } => geo::run_geocode(&config, &place, cli.json).await?,
        Commands::Reverse { lat, lon } => geo::run_reverse(&config, lat, lon, cli.json).await?,
        Commands::Phone {
            number,
            country,
            dial,
        } => phone::run_phone(&config, &number, country.as_deref(), dial),
    }

    Ok(())
}
