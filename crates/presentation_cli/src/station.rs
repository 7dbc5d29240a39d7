//! Entities and coordinators of the configured location
//!
//! Sensors read a forecast in the configured unit system while the weather
//! entity always reads SI, so a location has one coordinator per unit
//! system in use.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use application::{
    CurrentConditions, ForecastEntry, INVALID_API_KEY_MESSAGE, SensorEntity, SensorRegistry,
    SensorSnapshot, UpdateCoordinator, WeatherEntity, build_sensor_entities,
};
use domain::{BlockName, UnitSystem, WeatherCondition};
use infrastructure::scheduler::wait_for_shutdown;
use infrastructure::{ForecastAdapter, Platform, Settings, spawn_polling_task};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

const BASE_BLOCKS: [BlockName; 3] = [BlockName::Currently, BlockName::Hourly, BlockName::Daily];

/// Coordinator plus the entities that read from it
#[derive(Clone)]
struct Binding {
    units: UnitSystem,
    coordinator: Arc<UpdateCoordinator>,
    sensors: Vec<SensorEntity>,
    weather: Option<WeatherEntity>,
}

impl Binding {
    fn sensor_snapshots(&self) -> Vec<SensorSnapshot> {
        let Some(forecast) = self.coordinator.data() else {
            return Vec::new();
        };
        let available = self.coordinator.last_update_success();
        self.sensors
            .iter()
            .map(|sensor| sensor.snapshot(&forecast, available))
            .collect()
    }

    fn weather_snapshot(&self) -> Option<WeatherSnapshot> {
        let weather = self.weather.as_ref()?;
        let forecast = self.coordinator.data()?;
        Some(WeatherSnapshot {
            unique_id: weather.unique_id().to_string(),
            name: weather.name().to_string(),
            attribution: weather.attribution(),
            available: weather.available(&self.coordinator),
            condition: weather.condition(&forecast),
            current: weather.current(&forecast),
            daily: weather.daily_forecast(&forecast),
            hourly: weather.hourly_forecast(&forecast),
            twice_daily: weather.twice_daily_forecast(&forecast),
        })
    }

    fn log_states(&self) {
        for snapshot in self.sensor_snapshots() {
            info!(
                entity = %snapshot.unique_id,
                state = %snapshot
                    .state
                    .as_ref()
                    .map_or_else(|| "unknown".to_string(), ToString::to_string),
                unit = snapshot.unit_of_measurement.unwrap_or_default(),
                available = snapshot.available,
                "Sensor updated"
            );
        }
        if let Some(weather) = self.weather_snapshot() {
            info!(
                entity = %weather.unique_id,
                condition = weather.condition.map_or("unknown", |c| c.as_str()),
                temperature = ?weather.current.temperature,
                daily = weather.daily.as_ref().map_or(0, Vec::len),
                hourly = weather.hourly.as_ref().map_or(0, Vec::len),
                "Weather updated"
            );
        }
    }
}

/// Weather entity state for display
#[derive(Debug, Serialize)]
pub struct WeatherSnapshot {
    pub unique_id: String,
    pub name: String,
    pub attribution: &'static str,
    pub available: bool,
    pub condition: Option<WeatherCondition>,
    pub current: CurrentConditions,
    pub daily: Option<Vec<ForecastEntry>>,
    pub hourly: Option<Vec<ForecastEntry>>,
    pub twice_daily: Option<Vec<ForecastEntry>>,
}

/// Everything one refresh cycle produces
#[derive(Debug, Serialize)]
pub struct StationSnapshot {
    pub sensors: Vec<SensorSnapshot>,
    pub weather: Option<WeatherSnapshot>,
}

/// Set-up platforms of one location
pub struct Station {
    bindings: Vec<Binding>,
    scan_interval: Duration,
}

impl Station {
    /// Build adapters, coordinators and entities for the enabled platforms
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built or a monitored condition
    /// is unknown.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let mut plans: Vec<(UnitSystem, Vec<BlockName>)> = Vec::new();
        if settings.has_platform(Platform::Sensor) {
            plans.push((settings.units, BASE_BLOCKS.to_vec()));
        }
        if settings.has_platform(Platform::Weather) {
            let mut blocks = BASE_BLOCKS.to_vec();
            if settings.client.include_day_night {
                blocks.push(BlockName::DayNight);
            }
            match plans.iter_mut().find(|(units, _)| *units == UnitSystem::Si) {
                Some((_, existing)) => {
                    for block in blocks {
                        if !existing.contains(&block) {
                            existing.push(block);
                        }
                    }
                },
                None => plans.push((UnitSystem::Si, blocks)),
            }
        }

        let sensors = if settings.has_platform(Platform::Sensor) {
            build_sensor_entities(SensorRegistry::standard(), &settings.sensor_setup())?
        } else {
            Vec::new()
        };

        let mut bindings = Vec::with_capacity(plans.len());
        for (units, blocks) in plans {
            let adapter =
                ForecastAdapter::new(settings.client.clone(), settings.forecast_request(units))?
                    .with_required_blocks(blocks);
            bindings.push(Binding {
                units,
                coordinator: Arc::new(UpdateCoordinator::new(Arc::new(adapter))),
                sensors: Vec::new(),
                weather: None,
            });
        }

        if let Some(binding) = bindings.iter_mut().find(|b| b.units == settings.units) {
            binding.sensors = sensors;
        }
        if settings.has_platform(Platform::Weather) {
            if let Some(binding) = bindings.iter_mut().find(|b| b.units == UnitSystem::Si) {
                binding.weather = Some(WeatherEntity::new(
                    settings.name.clone(),
                    settings.entry_id.clone(),
                    settings.rounding,
                ));
            }
        }

        info!(
            sensors = bindings.iter().map(|b| b.sensors.len()).sum::<usize>(),
            weather = bindings.iter().any(|b| b.weather.is_some()),
            coordinators = bindings.len(),
            "Platforms set up"
        );

        Ok(Self {
            bindings,
            scan_interval: settings.scan_interval,
        })
    }

    /// Initial refresh of every coordinator; any failure aborts setup
    ///
    /// # Errors
    ///
    /// Returns the remediation message for a rejected API key and the
    /// refresh error otherwise.
    pub async fn first_refresh(&self) -> anyhow::Result<()> {
        for binding in &self.bindings {
            match binding.coordinator.refresh().await {
                Ok(_) => {},
                Err(e) if e.is_authentication() => anyhow::bail!(INVALID_API_KEY_MESSAGE),
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Initial forecast refresh failed ({} units)", binding.units)
                    });
                },
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> StationSnapshot {
        StationSnapshot {
            sensors: self
                .bindings
                .iter()
                .flat_map(Binding::sensor_snapshots)
                .collect(),
            weather: self.bindings.iter().find_map(Binding::weather_snapshot),
        }
    }

    pub fn log_states(&self) {
        for binding in &self.bindings {
            binding.log_states();
        }
    }

    /// Start polling and state logging; both stop when `shutdown` flips
    #[must_use]
    pub fn spawn(&self, shutdown: &watch::Receiver<bool>) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::with_capacity(self.bindings.len() * 2);
        for binding in &self.bindings {
            handles.push(spawn_polling_task(
                Arc::clone(&binding.coordinator),
                self.scan_interval,
                shutdown.clone(),
            ));
            handles.push(tokio::spawn(report_updates(
                binding.clone(),
                shutdown.clone(),
            )));
        }
        handles
    }
}

/// Log entity states after each successful publish
async fn report_updates(binding: Binding, mut shutdown: watch::Receiver<bool>) {
    let mut published = binding.coordinator.subscribe();

    loop {
        tokio::select! {
            () = wait_for_shutdown(&mut shutdown) => break,
            changed = published.changed() => {
                if changed.is_err() {
                    warn!(units = %binding.units, "Coordinator dropped, no more updates");
                    break;
                }
                binding.log_states();
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure::AppConfig;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(extra: &str) -> Settings {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            format!(
                "[pirateweather]\napi_key = \"test-key\"\nlatitude = 45.0\nlongitude = -75.0\n\
                 monitored_conditions = [\"temperature\"]\n{extra}\n"
            ),
        )
        .unwrap();
        AppConfig::load_from(&path).unwrap().validate().unwrap()
    }

    #[tokio::test]
    async fn test_separate_coordinator_for_weather() {
        let station = Station::new(&settings("units = \"us\"")).unwrap();

        assert_eq!(station.bindings.len(), 2);
        let us = &station.bindings[0];
        let si = &station.bindings[1];
        assert_eq!(us.units, UnitSystem::Us);
        assert_eq!(us.sensors.len(), 1);
        assert!(us.weather.is_none());
        assert_eq!(si.units, UnitSystem::Si);
        assert!(si.sensors.is_empty());
        assert!(si.weather.is_some());
    }

    #[tokio::test]
    async fn test_shared_coordinator_in_si() {
        let station = Station::new(&settings("units = \"si\"")).unwrap();

        assert_eq!(station.bindings.len(), 1);
        assert_eq!(station.bindings[0].sensors.len(), 1);
        assert!(station.bindings[0].weather.is_some());
    }

    #[tokio::test]
    async fn test_sensor_platform_only() {
        let station = Station::new(&settings("units = \"ca\"\nplatforms = [\"sensor\"]")).unwrap();

        assert_eq!(station.bindings.len(), 1);
        assert_eq!(station.bindings[0].units, UnitSystem::Ca);
        assert!(station.snapshot().weather.is_none());
    }

    #[tokio::test]
    async fn test_first_refresh_reports_rejected_key() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let config = format!("units = \"si\"\nendpoint = \"{}\"", mock_server.uri());
        let station = Station::new(&settings(&config)).unwrap();
        let err = station.first_refresh().await.unwrap_err();

        assert_eq!(err.to_string(), INVALID_API_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_first_refresh_populates_snapshot() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("units", "si"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "currently": {"temperature": 21.456, "icon": "clear-day"},
                "hourly": {"data": []},
                "daily": {"data": [{"time": 1_760_587_200, "temperatureHigh": 24.0}]},
                "day_night": {"data": []},
                "flags": {"units": "si"},
            })))
            .mount(&mock_server)
            .await;

        let config = format!("units = \"si\"\nendpoint = \"{}\"", mock_server.uri());
        let station = Station::new(&settings(&config)).unwrap();
        station.first_refresh().await.unwrap();
        let snapshot = station.snapshot();

        assert_eq!(snapshot.sensors.len(), 1);
        assert_eq!(
            snapshot.sensors[0].state,
            Some(application::SensorValue::Float(21.46))
        );
        let weather = snapshot.weather.unwrap();
        assert!(weather.available);
        assert_eq!(weather.condition, Some(WeatherCondition::Sunny));
        assert_eq!(weather.daily.map(|d| d.len()), Some(1));
        assert!(weather.hourly.is_none());
    }

    #[tokio::test]
    async fn test_upstream_failure_fails_setup() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let config = format!("units = \"si\"\nendpoint = \"{}\"", mock_server.uri());
        let station = Station::new(&settings(&config)).unwrap();
        let err = station.first_refresh().await.unwrap_err();

        assert!(err.to_string().contains("Initial forecast refresh failed"));
    }
}
