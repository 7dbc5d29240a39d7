//! Update coordinator
//!
//! Owns the published forecast. Refreshes are single-flight: a refresh that
//! arrives while another is running waits for it and returns its outcome
//! instead of issuing a second request. A fully parsed forecast is swapped in
//! atomically, so readers never observe a partial update, and a failed
//! refresh leaves the previous forecast in place.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use domain::Forecast;
use parking_lot::RwLock;
use tokio::sync::{Mutex, watch};
use tracing::{debug, error, info, warn};

use crate::error::ApplicationError;
use crate::ports::ForecastPort;

#[derive(Debug, Default)]
struct RefreshStatus {
    last_update_success: bool,
    last_error: Option<ApplicationError>,
    last_success_at: Option<DateTime<Utc>>,
}

/// Refreshes and publishes forecasts for one configured location
pub struct UpdateCoordinator {
    port: Arc<dyn ForecastPort>,
    data: ArcSwapOption<Forecast>,
    status: RwLock<RefreshStatus>,
    in_flight: Mutex<()>,
    /// Completed refresh attempts, successful or not
    attempts: AtomicU64,
    notify: watch::Sender<u64>,
}

impl std::fmt::Debug for UpdateCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateCoordinator")
            .field("has_data", &self.data.load().is_some())
            .field("status", &*self.status.read())
            .field("attempts", &self.attempts.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

impl UpdateCoordinator {
    #[must_use]
    pub fn new(port: Arc<dyn ForecastPort>) -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            port,
            data: ArcSwapOption::empty(),
            status: RwLock::new(RefreshStatus::default()),
            in_flight: Mutex::new(()),
            attempts: AtomicU64::new(0),
            notify,
        }
    }

    /// Fetch a new forecast and publish it
    ///
    /// If the returned future is dropped before the fetch completes nothing
    /// is published.
    ///
    /// # Errors
    ///
    /// Returns the port error of this refresh, or of the in-flight refresh
    /// this call was coalesced into.
    pub async fn refresh(&self) -> Result<Arc<Forecast>, ApplicationError> {
        let seen = self.attempts.load(Ordering::Acquire);
        let _guard = self.in_flight.lock().await;

        if self.attempts.load(Ordering::Acquire) != seen {
            debug!("Refresh coalesced into the one that just completed");
            return self.last_outcome();
        }

        let outcome = self.port.fetch_forecast().await.map(Arc::new);
        match &outcome {
            Ok(forecast) => self.publish(Arc::clone(forecast)),
            Err(e) => self.record_failure(e.clone()),
        }
        self.attempts.fetch_add(1, Ordering::AcqRel);

        outcome
    }

    fn publish(&self, forecast: Arc<Forecast>) {
        info!(
            hourly = forecast.hourly().len(),
            daily = forecast.daily().len(),
            alerts = forecast.alerts().len(),
            "Forecast refreshed"
        );
        self.data.store(Some(forecast));
        {
            let mut status = self.status.write();
            status.last_update_success = true;
            status.last_error = None;
            status.last_success_at = Some(Utc::now());
        }
        self.notify.send_modify(|version| *version += 1);
    }

    fn record_failure(&self, err: ApplicationError) {
        if err.is_authentication() {
            error!(error = %err, "Forecast refresh rejected");
        } else {
            warn!(error = %err, retryable = err.is_retryable(), "Forecast refresh failed");
        }
        let mut status = self.status.write();
        status.last_update_success = false;
        status.last_error = Some(err);
    }

    fn last_outcome(&self) -> Result<Arc<Forecast>, ApplicationError> {
        let status = self.status.read();
        if let Some(err) = &status.last_error {
            return Err(err.clone());
        }
        self.data
            .load_full()
            .ok_or_else(|| ApplicationError::Internal("no forecast published".to_string()))
    }

    /// Latest published forecast
    #[must_use]
    pub fn data(&self) -> Option<Arc<Forecast>> {
        self.data.load_full()
    }

    /// Whether the most recent refresh succeeded
    #[must_use]
    pub fn last_update_success(&self) -> bool {
        self.status.read().last_update_success
    }

    #[must_use]
    pub fn last_error(&self) -> Option<ApplicationError> {
        self.status.read().last_error.clone()
    }

    #[must_use]
    pub fn last_success_at(&self) -> Option<DateTime<Utc>> {
        self.status.read().last_success_at
    }

    /// Receiver bumped after every successful publish
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }
}
