//! Emotional Weather - command line client
//!
//! Main entry point for the application.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use emoweather::app::AppController;
use emoweather::climate::ForecastGenerator;
use emoweather::environment::{mood_notes, EnvironmentSimulator};
use emoweather::location::{
    AddressFields, Coordinates, Geocoder, LocationAcquirer, LocationError, ManualPosition,
    NominatimGeocoder, OfflineGeocoder,
};
use emoweather::storage::config::{get_data_dir, load_config, load_config_from};
use emoweather::storage::{AppConfig, Database};

type App = AppController<Database, ManualPosition, CliGeocoder, EnvironmentSimulator<ChaCha8Rng>>;

#[derive(Parser, Debug)]
#[command(name = "emoweather", version, about = "Your daily emotional forecast")]
struct Cli {
    /// Data directory (defaults to the platform data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Configuration file (defaults to config.toml in the data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Latitude of the current position
    #[arg(long, global = true, allow_negative_numbers = true, requires = "lng")]
    lat: Option<f64>,

    /// Longitude of the current position
    #[arg(long, global = true, allow_negative_numbers = true, requires = "lat")]
    lng: Option<f64>,

    /// Skip reverse geocoding and use coordinate-based names
    #[arg(long, global = true)]
    offline: bool,

    /// Seed for reproducible weather and forecasts
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the current position into a location
    Locate,

    /// Submit a mood report at the current location
    Submit {
        /// Mood category (joyful, content, neutral, anxious, sad, angry)
        mood: String,

        /// Intensity percentage (1-100)
        intensity: u8,
    },

    /// Show the local emotional climate
    Climate {
        /// Summarize reports from every location
        #[arg(long)]
        all_locations: bool,
    },

    /// Show recent mood reports
    History {
        /// Number of reports to show
        #[arg(long, default_value_t = 6)]
        limit: usize,
    },

    /// Show personal statistics
    Insights,

    /// Draw an emotional forecast
    Forecast,

    /// Show the weather at the last resolved location
    Weather,

    /// Show location and permission status
    Status,
}

/// Geocoder selected on the command line.
enum CliGeocoder {
    Online(NominatimGeocoder),
    Offline(OfflineGeocoder),
}

impl Geocoder for CliGeocoder {
    async fn reverse(&self, coordinates: Coordinates) -> Result<AddressFields, LocationError> {
        match self {
            CliGeocoder::Online(g) => g.reverse(coordinates).await,
            CliGeocoder::Offline(g) => g.reverse(coordinates).await,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_app_config(cli: &Cli) -> Result<AppConfig> {
    let config_path = match (&cli.config, &cli.data_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join("config.toml"),
        (None, None) => return load_config().context("Failed to load config"),
    };
    let data_dir = cli.data_dir.clone().unwrap_or_else(get_data_dir);

    load_config_from(&config_path, data_dir)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))
}

fn build_app(cli: &Cli, config: &AppConfig) -> Result<App> {
    let store = Database::open(&config.database_path()).context("Failed to open state database")?;

    // A run without coordinates can still use the saved location; only a
    // `locate` without coordinates is refused.
    let position = match (cli.lat, cli.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
        _ => config.location.default_coordinates(),
    };
    let acquirer = LocationAcquirer::with_limits(
        ManualPosition::new(position),
        config.location.acquisition_timeout(),
        config.location.max_fix_age(),
    );

    let geocoder = if cli.offline {
        CliGeocoder::Offline(OfflineGeocoder)
    } else {
        CliGeocoder::Online(
            NominatimGeocoder::with_base_url(
                config.location.geocoder_url.clone(),
                &config.location.user_agent,
                config.location.request_timeout(),
            )
            .context("Failed to create geocoder")?,
        )
    };

    let environment = match cli.seed.or(config.environment.seed) {
        Some(seed) => EnvironmentSimulator::seeded(seed),
        None => EnvironmentSimulator::from_entropy(),
    };

    AppController::load(store, Some(acquirer), geocoder, environment, config.climate.clone())
        .context("Failed to load application state")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("Starting emoweather v{}", env!("CARGO_PKG_VERSION"));

    let config = load_app_config(&cli)?;
    let mut app = build_app(&cli, &config)?;

    match &cli.cmd {
        Commands::Locate => {
            let permission = app.request_location_resolution().await?;
            println!("Permission: {}", permission);
            println!("Location:   {}", app.location_display());
            if let Some(neighborhood) = app.location().and_then(|l| l.neighborhood.as_deref()) {
                println!("Neighborhood: {}", neighborhood);
            }
            if let Some(weather) = app.weather() {
                println!(
                    "Weather:    {} {}°C (feels like {}°C), humidity {}%, UV {}",
                    weather.condition,
                    weather.temperature,
                    weather.feels_like,
                    weather.humidity,
                    weather.uv_index
                );
            }
        }
        Commands::Submit { mood, intensity } => {
            let entry = app.submit_mood(mood, *intensity)?;
            if cli.json {
                print_json(entry)?;
            } else {
                println!(
                    "Recorded {} at {}% in {}",
                    entry.mood, entry.intensity, entry.location
                );
            }
        }
        Commands::Climate { all_locations } => {
            let summary = if *all_locations {
                app.climate_with_filter(false)
            } else {
                app.climate()
            };
            match summary {
                Some(summary) if cli.json => print_json(&summary)?,
                Some(summary) => {
                    println!("Local Emotional Climate: {}", app.location_display());
                    println!("  Based on {} recent reports", summary.total_reports);
                    println!(
                        "  Average intensity: {}% ({:?})",
                        summary.average_intensity,
                        summary.intensity_band()
                    );
                    println!("  Dominant mood:     {}", summary.dominant_mood);
                    println!("  Trend:             {}", summary.trend);
                    println!("  {}", summary.narrative(app.location_display()));
                }
                None => println!(
                    "Submit your first mood report to start building the emotional climate data for {}",
                    app.location_display()
                ),
            }
        }
        Commands::History { limit } => {
            let reports = app.recent_reports(*limit);
            if cli.json {
                print_json(&reports)?;
            } else if reports.is_empty() {
                println!("No mood reports yet");
            } else {
                for entry in reports {
                    println!(
                        "{}  {:<8} {:>3}%  {}",
                        entry.timestamp.format("%Y-%m-%d %H:%M"),
                        entry.mood,
                        entry.intensity,
                        entry.location
                    );
                }
            }
        }
        Commands::Insights => {
            let insights = app.insights();
            if cli.json {
                print_json(&insights)?;
            } else {
                println!("Total reports:  {}", insights.total_reports);
                println!("Recent average: {}%", insights.recent_average);
                println!("Recent reports: {}", insights.recent_count);
                println!("Locations:      {}", insights.location_count);
            }
        }
        Commands::Forecast => {
            let mut generator = match cli.seed.or(config.environment.seed) {
                Some(seed) => ForecastGenerator::seeded(seed),
                None => ForecastGenerator::from_entropy(),
            };
            let forecast = generator.next_forecast();
            if cli.json {
                print_json(&forecast)?;
            } else {
                println!("{} ({}%)", forecast.condition, forecast.intensity);
                println!("  {}", forecast.description);
            }
        }
        Commands::Weather => match app.weather() {
            Some(weather) if cli.json => print_json(weather)?,
            Some(weather) => {
                println!("Current Weather Conditions: {}", app.location_display());
                println!(
                    "  {} {}°C, feels like {}°C",
                    weather.condition, weather.temperature, weather.feels_like
                );
                println!("  Humidity {}% ({})", weather.humidity, weather.humidity_level());
                println!("  UV index {} ({})", weather.uv_index, weather.uv_level());
                println!(
                    "  Wind {} km/h, pressure {} hPa, visibility {} km",
                    weather.wind_speed, weather.pressure, weather.visibility
                );
                for note in mood_notes(weather) {
                    println!("  {}", note);
                }
            }
            None => println!("No location resolved yet; run `emoweather locate` first"),
        },
        Commands::Status => {
            println!("Permission: {}", app.permission());
            println!("Location:   {}", app.location_display());
            if let Some(location) = app.location() {
                println!("Coordinates: {}", location.coordinates);
            }
            println!("Reports:    {}", app.journal().len());
        }
    }

    Ok(())
}
