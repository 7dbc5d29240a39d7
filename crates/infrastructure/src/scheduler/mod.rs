//! Background polling of the update coordinator
//!
//! One task per configured location. Each tick runs a coordinator refresh;
//! shutdown drops an in-flight refresh so nothing is published after it.

use std::sync::Arc;
use std::time::Duration;

use application::UpdateCoordinator;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::MIN_SCAN_INTERVAL_SECS;

/// Polling period actually used for a configured scan interval
#[must_use]
pub fn effective_interval(scan_interval: Duration) -> Duration {
    scan_interval.max(Duration::from_secs(MIN_SCAN_INTERVAL_SECS))
}

/// Spawn a background task that refreshes `coordinator` every interval.
///
/// The first refresh happens one interval after spawning; setup is expected
/// to have performed the initial one. The task ends when `shutdown` becomes
/// `true` or its sender is dropped.
///
/// Returns a `JoinHandle` that can be awaited after signalling shutdown.
pub fn spawn_polling_task(
    coordinator: Arc<UpdateCoordinator>,
    scan_interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let period = effective_interval(scan_interval);
    info!(interval_secs = period.as_secs(), "Starting forecast polling task");

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                () = wait_for_shutdown(&mut shutdown) => break,
                _ = ticker.tick() => {},
            }

            tokio::select! {
                () = wait_for_shutdown(&mut shutdown) => {
                    debug!("Shutdown during refresh, dropping in-flight fetch");
                    break;
                },
                result = coordinator.refresh() => {
                    if let Err(e) = result {
                        debug!(error = %e, "Scheduled refresh failed");
                    }
                },
            }
        }

        info!("Forecast polling task stopped");
    })
}

/// Resolves once shutdown is requested or the sender is gone
pub async fn wait_for_shutdown(shutdown: &mut watch::Receiver<bool>) {
    // An error means the sender was dropped, which also ends polling
    let _ = shutdown.wait_for(|stop| *stop).await;
}
