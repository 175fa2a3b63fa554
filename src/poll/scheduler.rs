use tokio::time::interval;

use crate::common::AppState;
use crate::poll::worker;

/// Run the sensor poller on a fixed cadence.
///
/// The first tick fires immediately. Every tick spawns an independent cycle
/// and the ticker never waits for it, so a slow request neither delays the
/// next tick nor is cancelled by it.
pub async fn run_poller(state: AppState) {
    let period = state.config.poll_interval();

    tracing::info!(
        interval_ms = state.config.poll_interval_ms,
        url = state.client.sensor_data_url(),
        schema = state.panel.schema().name(),
        discard_stale = state.config.discard_stale_responses,
        "Starting sensor poller"
    );

    let mut ticker = interval(period);

    loop {
        ticker.tick().await;

        let state = state.clone();
        tokio::spawn(async move {
            worker::poll_once(&state).await;
        });
    }
}
