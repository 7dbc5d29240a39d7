//! Pirate Weather CLI
//!
//! Runs the sensor and weather platforms for one configured location.

#![allow(clippy::print_stdout)]

mod station;

use std::path::PathBuf;

use application::{SensorRegistry, validate_api_key};
use clap::{Parser, Subcommand};
use domain::UnitSystem;
use infrastructure::{AppConfig, ForecastAdapter, init_telemetry};
use tokio::sync::watch;
use tracing::info;

use crate::station::{Station, StationSnapshot};

/// Pirate Weather CLI
#[derive(Parser)]
#[command(name = "pirateweather")]
#[command(author, version, about = "Pirate Weather sensors and forecast", long_about = None)]
struct Cli {
    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "PIRATEWEATHER_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh on the scan interval until interrupted, logging every state
    Run,

    /// Refresh once and print all entity states
    Once {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every monitorable condition
    Sensors {
        /// Show units for this unit system
        #[arg(short, long, default_value = "si")]
        units: UnitSystem,
    },

    /// Check the configured API key with one forecast request
    ValidateKey,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn load_config(path: Option<&PathBuf>, verbose: u8) -> anyhow::Result<AppConfig> {
    let mut config = match path {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(filter) = log_filter_from_verbosity(verbose) {
        config.telemetry.log_filter = filter.to_string();
    }
    Ok(config)
}

fn print_registry(units: UnitSystem) {
    for descriptor in SensorRegistry::standard().iter() {
        let modes = descriptor
            .modes
            .iter()
            .map(|mode| format!("{mode:?}").to_lowercase())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{:<32} {:<36} {:<8} {}{}",
            descriptor.key,
            descriptor.name,
            descriptor.unit_for(units).unwrap_or("-"),
            if modes.is_empty() { "-" } else { &modes },
            if descriptor.deprecated { " (deprecated)" } else { "" },
        );
    }
}

fn print_snapshot(snapshot: &StationSnapshot) {
    for sensor in &snapshot.sensors {
        let state = sensor
            .state
            .as_ref()
            .map_or_else(|| "unknown".to_string(), ToString::to_string);
        println!(
            "{:<48} {state} {}",
            sensor.name,
            sensor.unit_of_measurement.unwrap_or_default()
        );
    }

    if let Some(weather) = &snapshot.weather {
        println!();
        println!(
            "🌤️  {} ({})",
            weather.name,
            weather.condition.map_or("unknown", |c| c.as_str())
        );
        if let Some(temperature) = &weather.current.temperature {
            println!("   Temperature: {temperature} °C");
        }
        if let Some(humidity) = &weather.current.humidity {
            println!("   Humidity: {humidity} %");
        }
        for entry in weather.daily.iter().flatten() {
            println!(
                "   {}  {}  high {:?}  low {:?}",
                entry.datetime.as_deref().unwrap_or("-"),
                entry.condition.map_or("-", |c| c.as_str()),
                entry.native_temperature,
                entry.native_templow,
            );
        }
        println!("   {}", weather.attribution);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref(), cli.verbose)?;
    init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Sensors { units } => print_registry(units),

        Commands::ValidateKey => {
            let settings = config.validate()?;
            let request = settings.forecast_request(settings.units);
            let adapter = ForecastAdapter::new(settings.client.clone(), request)?;
            match validate_api_key(&adapter).await {
                Ok(()) => println!("✅ API key accepted"),
                Err(e) => {
                    println!("❌ {e}");
                    std::process::exit(1);
                },
            }
        },

        Commands::Once { json } => {
            let settings = config.validate()?;
            let station = Station::new(&settings)?;
            station.first_refresh().await?;

            let snapshot = station.snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print_snapshot(&snapshot);
            }
        },

        Commands::Run => {
            let settings = config.validate()?;
            let station = Station::new(&settings)?;
            station.first_refresh().await?;
            station.log_states();

            let (stop, shutdown) = watch::channel(false);
            let handles = station.spawn(&shutdown);

            tokio::signal::ctrl_c().await?;
            info!("Interrupted, stopping");
            stop.send_replace(true);
            for handle in handles {
                handle.await?;
            }
        },
    }

    Ok(())
}
