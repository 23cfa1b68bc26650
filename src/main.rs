use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{ArgGroup, Parser, Subcommand};
use tracing::error;

use weather_outfit::{
    AppConfig, ConfiguredGeolocator, Coordinates, Geolocator, LocationQuery, OutfitForecastService,
    telemetry, web,
};

/// US weather lookup with outfit recommendations
#[derive(Debug, Parser)]
#[command(name = "weather-outfit", version, about)]
struct Cli {
    /// Configuration file, defaults to the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP service
    Serve,

    /// Look up weather and an outfit once and print it
    #[command(group(ArgGroup::new("target").required(true).args(["location", "lat", "here"])))]
    Lookup {
        /// City, state, address or zip code
        #[arg(long)]
        location: Option<String>,

        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Use the position from the [geolocation] config section
        #[arg(long)]
        here: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_from_path(cli.config)?;
    let _telemetry = telemetry::init(&config.logging)?;

    match cli.command {
        Command::Serve => web::run(&config).await,
        Command::Lookup {
            location,
            lat,
            lon,
            here,
            json,
        } => {
            let query = match (location, lat, lon) {
                _ if here => {
                    let geolocator = ConfiguredGeolocator::new(&config.geolocation);
                    let position = geolocator
                        .current_position()
                        .await
                        .map_err(|e| anyhow!(e.user_message()))?;
                    LocationQuery::Coordinates(position)
                }
                (_, Some(lat), Some(lon)) => LocationQuery::Coordinates(Coordinates::new(lat, lon)),
                (Some(text), _, _) => {
                    LocationQuery::text(&text).map_err(|e| anyhow!(e.user_message()))?
                }
                _ => return Err(anyhow!("Either --lat/--lon, --location or --here is required")),
            };

            let service = OutfitForecastService::from_config(&config)?;
            let report = service.lookup(query).await.map_err(|e| {
                error!("Lookup failed: {}", e);
                anyhow!(e.user_message())
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
            Ok(())
        }
    }
}
